//! Fixed text substituted for empty free-text fields. The same text doubles
//! as the input placeholder in the view.

pub const DEFAULT_PLOT: &str = "A brother and sister traveling to foreign countries.";

pub const DEFAULT_THEME: &str = "Cultural experiences, small mistakes, and meaningful lessons.";

pub const DEFAULT_TONE: &str = "Simple, warm, and encouraging.";

pub const DEFAULT_INCLUDE_GRAMMAR: &str = "\
- gerunds
- sense verbs + adjective (e.g., 'look happy')
- subjective relative pronouns (who, which, that as subjects)
- adverbs of frequency
- present perfect (but not present perfect progressive)
- so…that clauses
- passive voice
- comparative degree (but not double comparative structures like 'the more…the more')
- objective relative pronouns (whom, which, that as objects)
- participles expressing emotion (e.g., 'surprising', 'excited')
- 'It' as a dummy subject (e.g., 'It is important to…')
- indirect questions
- object complements (e.g., 'make me happy')
- if clauses";

pub const DEFAULT_EXCLUDE_GRAMMAR: &str = "\
- present perfect progressive
- the relative pronoun 'what'
- non-restrictive relative clauses
- participles modifying nouns from behind (e.g., 'the man standing there')
- past perfect
- conjunctions like 'although, unless, whereas'
- if/whether used for indirect yes/no questions
- passive voice of modal verbs (e.g., 'must be done')
- idiomatic 'It is/was ~ for ~ to ~' expressions
- relative adverbs (when, where, why as relative pronouns)
- the comparative (… the comparative) structure (e.g., 'the more, the better')
- participle clauses (e.g., 'Walking down the street, he…')
- past subjunctive (e.g., 'If I were you…')
- 'so that' purpose clauses";
