use fabula::gemini::GeminiAdapterBuilder;
use fabula::story::{FieldEdit, FieldId, StoryController, TriggerResult};
use tracing_subscriber::EnvFilter;

/// # Story form – one full generation cycle
///
/// Fills the form from `--field value` pairs, presses the button once and
/// prints the rendered form before and after.
///
/// ```bash
/// export API_KEY=…          # Gemini key; without it the error region shows
/// cargo run -p fabula --example gemini_story -- \
///     --plot "Two cousins open a tea shop." --writingType poem --ageGroup elementary
/// ```
///
/// Field names are the form keys: `plot`, `theme`, `tone`, `writingType`,
/// `ageGroup`, `proficiency`, `includeGrammar`, `excludeGrammar`.
/// Set `RUST_LOG=fabula_story=debug` to see the prompt lifecycle.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = GeminiAdapterBuilder::new_from_env().build()?;
    let controller = StoryController::new(backend);

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let key = flag.trim_start_matches("--");
        let field = FieldId::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| anyhow::anyhow!("unknown field `{key}`"))?;
        let value = args
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing value for `{key}`"))?;
        controller.edit(FieldEdit::from_input(field, value)?);
    }

    println!("{}", controller.view());

    if controller.trigger().await == TriggerResult::Ignored {
        println!("Nothing to do: enter a plot with --plot.");
        return Ok(());
    }

    println!("{}", controller.view());
    Ok(())
}
