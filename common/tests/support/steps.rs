use std::convert::Infallible;
use std::str::FromStr;

/// Comma-separated locale list supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepLocales {
    locales: Vec<String>,
}

impl FromStr for StepLocales {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let locales = input
            .split(',')
            .map(|entry| entry.trim().trim_matches(|candidate| matches!(candidate, '"' | '\'')))
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self { locales })
    }
}

impl StepLocales {
    /// Consumes the step value, yielding the parsed locales.
    pub fn into_inner(self) -> Vec<String> {
        self.locales
    }
}
