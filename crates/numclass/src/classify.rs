use crate::facts::{FactOptions, FactProvider, NumbersApi};
use crate::prelude::{println, *};
use colored::Colorize;
use numclass_core::classify::classify;
use numclass_core::fact::resolve_fun_fact;
use numclass_core::number::parse_number;
use numclass_core::response::ClassificationResult;

#[derive(Debug, clap::Args)]
pub struct ClassifyOptions {
    /// Integer to classify (e.g., "371" or "-5")
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub facts: FactOptions,
}

/// Classify `number` and attach a fun fact, falling back when the provider fails.
///
/// Shared by the HTTP handler and the `classify` command. Provider failures
/// are absorbed; only a failed classifier task is returned as an error.
pub async fn classify_data(
    number: i64,
    facts: &dyn FactProvider,
) -> Result<ClassificationResult, Error> {
    // Keep the arithmetic off the async workers
    let classification = tokio::task::spawn_blocking(move || classify(number))
        .await
        .map_err(|e| Error::Classification(e.to_string()))?;

    let outcome = facts.fetch(number).await;
    if let Err(err) = &outcome {
        log::warn!("Fun fact for {number} unavailable: {err}");
    }

    Ok(ClassificationResult::new(
        &classification,
        resolve_fun_fact(outcome),
    ))
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let number = parse_number(&options.number).map_err(|e| eyre!("Invalid number: {e}"))?;

    if global.verbose {
        println!("Fact provider: {}", options.facts.fact_api_url);
    }

    let facts = NumbersApi::from_options(&options.facts)?;
    let result = classify_data(number, &facts).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n{}\n", format!("Number: {}", result.number).green().bold());

    let properties = result
        .properties
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = new_table();
    table.add_row(prettytable::row!["Prime", result.is_prime]);
    table.add_row(prettytable::row!["Perfect", result.is_perfect]);
    table.add_row(prettytable::row!["Properties", properties]);
    table.add_row(prettytable::row!["Digit sum", result.digit_sum]);
    table.printstd();

    println!("\n{}", result.fun_fact);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{BoxFuture, FutureExt};
    use numclass_core::classify::Property;
    use numclass_core::fact::FALLBACK_FUN_FACT;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedFact(&'static str);

    impl FactProvider for FixedFact {
        fn fetch(&self, _number: i64) -> BoxFuture<'_, Result<String, Error>> {
            async move { Ok(self.0.to_string()) }.boxed()
        }
    }

    struct FailingFact;

    impl FactProvider for FailingFact {
        fn fetch(&self, _number: i64) -> BoxFuture<'_, Result<String, Error>> {
            async { Err(Error::Status(500)) }.boxed()
        }
    }

    #[tokio::test]
    async fn test_classify_data_with_fact() {
        let result = classify_data(371, &FixedFact("371 is narcissistic."))
            .await
            .unwrap();

        assert_eq!(result.number, 371);
        assert_eq!(result.properties, vec![Property::Armstrong, Property::Odd]);
        assert_eq!(result.digit_sum, 11);
        assert_eq!(result.fun_fact, "371 is narcissistic.");
    }

    #[tokio::test]
    async fn test_classify_data_falls_back_on_provider_error() {
        let result = classify_data(28, &FailingFact).await.unwrap();

        assert!(result.is_perfect);
        assert!(!result.is_prime);
        assert_eq!(result.properties, vec![Property::Even]);
        assert_eq!(result.digit_sum, 10);
        assert_eq!(result.fun_fact, FALLBACK_FUN_FACT);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_classify_data_keeps_runtime_responsive() {
        static FACTS: FixedFact = FixedFact("big");

        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = tokio::spawn({
            let ticks = ticks.clone();
            async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        let inputs = [
            i64::MAX,
            9_000_000_000_000_000_000,
            9_223_372_036_854_775_783,
        ];
        let classifications = inputs.map(|n| tokio::spawn(classify_data(n, &FACTS)));

        let results = tokio::time::timeout(
            Duration::from_secs(5),
            futures::future::join_all(classifications),
        )
        .await
        .expect("classification should finish promptly");

        tokio::time::sleep(Duration::from_millis(20)).await;
        ticker.abort();

        let results: Vec<_> = results.into_iter().map(|r| r.unwrap().unwrap()).collect();
        assert_eq!(results[0].number, i64::MAX);
        assert!(!results[0].is_prime);
        assert!(!results[1].is_perfect);
        assert!(results[2].is_prime);
        assert!(ticks.load(Ordering::SeqCst) > 0, "runtime was starved");
    }
}
