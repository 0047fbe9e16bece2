use std::convert::Infallible;
use std::str::FromStr;

fn unquote(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''))
}

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
            .map(unquote)
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

/// Free text supplied via behaviour-driven test steps, with quotes removed.
#[derive(Clone, Debug)]
pub struct StepText(String);

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(unquote(input).to_owned()))
    }
}

impl AsRef<str> for StepText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
