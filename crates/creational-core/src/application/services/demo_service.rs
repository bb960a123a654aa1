//! Demo Service - runs the pattern demonstrations.
//!
//! Each operation:
//! 1. Selects the concrete factory or creator for every requested variant
//! 2. Runs the pattern's client code / workflow
//! 3. Writes the resulting transcript to the console port

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Console},
    domain::{
        Family, PatternId, Transcript, Variant,
        abstract_factory::{client_code, factory_for},
        factory_method::{creator_for, creator_name},
    },
    error::DemoResult,
};

/// Runs demos and writes their output through a [`Console`].
pub struct DemoService {
    console: Box<dyn Console>,
}

impl DemoService {
    /// Create a new demo service writing to `console`.
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Run the Abstract Factory client code once per family.
    #[instrument(skip_all, fields(families = families.len()))]
    pub fn abstract_factory(&self, families: &[Family]) -> DemoResult<Transcript> {
        if families.is_empty() {
            return Err(ApplicationError::NothingSelected {
                pattern: PatternId::AbstractFactory.as_str(),
            }
            .into());
        }

        let mut transcript = Transcript::new(PatternId::AbstractFactory);
        for (idx, family) in families.iter().enumerate() {
            if idx == 0 {
                transcript.push(format!(
                    "Client: Testing client code with the {} factory type:",
                    family.ordinal()
                ));
            } else {
                transcript.push("");
                transcript.push(format!(
                    "Client: Testing the same client code with the {} factory type:",
                    family.ordinal()
                ));
            }

            let factory = factory_for(*family);
            transcript.extend(client_code(factory.as_ref()));
        }

        self.emit(&transcript)?;
        info!(lines = transcript.len(), "Abstract factory demo finished");
        Ok(transcript)
    }

    /// Run the Factory Method workflow once per creator variant.
    ///
    /// Banners for every creator come first, then the collected results in
    /// the same order.
    #[instrument(skip_all, fields(variants = variants.len()))]
    pub fn factory_method(&self, variants: &[Variant]) -> DemoResult<Transcript> {
        if variants.is_empty() {
            return Err(ApplicationError::NothingSelected {
                pattern: PatternId::FactoryMethod.as_str(),
            }
            .into());
        }

        let mut transcript = Transcript::new(PatternId::FactoryMethod);
        let mut results = Vec::with_capacity(variants.len());
        for variant in variants {
            transcript.push(format!("{} 実行", creator_name(*variant)));
            let creator = creator_for(*variant);
            results.push(creator.some_operation());
        }
        transcript.extend(results);

        self.emit(&transcript)?;
        info!(lines = transcript.len(), "Factory method demo finished");
        Ok(transcript)
    }

    fn emit(&self, transcript: &Transcript) -> DemoResult<()> {
        for line in &transcript.lines {
            self.console.write_line(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConsole;
    use crate::error::DemoError;
    use mockall::predicate::eq;

    fn quiet_console(expected_lines: usize) -> MockConsole {
        let mut console = MockConsole::new();
        console
            .expect_write_line()
            .times(expected_lines)
            .returning(|_| Ok(()));
        console
    }

    #[test]
    fn abstract_factory_family_one() {
        let service = DemoService::new(Box::new(quiet_console(3)));
        let t = service.abstract_factory(&[Family::One]).unwrap();
        assert_eq!(
            t.lines,
            vec![
                "Client: Testing client code with the first factory type:",
                "The result of the product B1.",
                "The result of the B1 collaborating with (The result of the product A1. )",
            ]
        );
    }

    #[test]
    fn abstract_factory_both_families() {
        let service = DemoService::new(Box::new(quiet_console(7)));
        let t = service.abstract_factory(&Family::ALL).unwrap();
        assert_eq!(t.lines[3], "");
        assert_eq!(
            t.lines[4],
            "Client: Testing the same client code with the second factory type:"
        );
        assert_eq!(t.lines[5], "The result of the product B2.");
    }

    #[test]
    fn factory_method_prints_banners_then_results() {
        let service = DemoService::new(Box::new(quiet_console(4)));
        let t = service.factory_method(&Variant::ALL).unwrap();
        assert_eq!(t.lines[0], "ConcreteCreator1 実行");
        assert_eq!(t.lines[1], "ConcreteCreator2 実行");
        assert!(t.lines[2].contains("ConcreteProduct1"));
        assert!(t.lines[3].contains("ConcreteProduct2"));
    }

    #[test]
    fn lines_reach_the_console_in_order() {
        let mut console = MockConsole::new();
        let mut seq = mockall::Sequence::new();
        console
            .expect_write_line()
            .with(eq("ConcreteCreator2 実行"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        console
            .expect_write_line()
            .withf(|l: &str| l.ends_with("ConcreteProduct2からのリターン"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = DemoService::new(Box::new(console));
        service.factory_method(&[Variant::Two]).unwrap();
    }

    #[test]
    fn empty_selection_is_rejected() {
        let service = DemoService::new(Box::new(quiet_console(0)));
        assert!(matches!(
            service.abstract_factory(&[]),
            Err(DemoError::Application(ApplicationError::NothingSelected { .. }))
        ));
        assert!(service.factory_method(&[]).is_err());
    }

    #[test]
    fn console_failure_propagates() {
        let mut console = MockConsole::new();
        console.expect_write_line().returning(|_| {
            Err(ApplicationError::Output {
                reason: "closed".into(),
            }
            .into())
        });
        let service = DemoService::new(Box::new(console));
        let err = service.factory_method(&[Variant::One]).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Internal);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let service = DemoService::new(Box::new(quiet_console(14)));
        let first = service.abstract_factory(&Family::ALL).unwrap();
        let second = service.abstract_factory(&Family::ALL).unwrap();
        assert_eq!(first, second);
    }
}
