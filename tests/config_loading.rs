//! Behaviour-driven tests for locale configuration loading.

use std::cell::RefCell;
use std::fs;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use translated_fields::{FallbackConfig, FallbackResolver, Locale};

mod support;
use support::steps::{StepLocales, StepText};

#[derive(Default)]
struct ConfigWorld {
    default: RefCell<Option<String>>,
    available: RefCell<Option<Vec<String>>>,
    unknown_setting: RefCell<bool>,
    written: RefCell<Option<(TempDir, Utf8PathBuf)>>,
    result: RefCell<Option<Result<FallbackResolver, String>>>,
}

impl ConfigWorld {
    fn source(&self) -> String {
        let mut source = String::new();
        if let Some(default) = self.default.borrow().as_deref() {
            source.push_str(&format!("default_locale = \"{default}\"\n"));
        }
        if let Some(available) = self.available.borrow().as_ref() {
            let quoted: Vec<String> = available.iter().map(|locale| format!("\"{locale}\"")).collect();
            source.push_str(&format!("available_locales = [{}]\n", quoted.join(", ")));
        }
        if *self.unknown_setting.borrow() {
            source.push_str("fallback_order = \"reverse\"\n");
        }
        source
    }

    fn resolver(&self) -> FallbackResolver {
        match self.result.borrow().as_ref() {
            Some(Ok(resolver)) => resolver.clone(),
            Some(Err(message)) => panic!("configuration should have loaded: {message}"),
            None => panic!("configuration should have been loaded"),
        }
    }
}

#[fixture]
fn world() -> ConfigWorld {
    ConfigWorld::default()
}

fn order(resolver: &FallbackResolver, requested: Option<&str>) -> Vec<String> {
    resolver
        .chain_for(requested)
        .iter()
        .map(Locale::to_string)
        .collect()
}

#[given("the default locale is {locale}")]
fn set_default(world: &ConfigWorld, locale: String) {
    world.default.borrow_mut().replace(locale);
}

#[given("the available locales are {locales}")]
fn set_available(world: &ConfigWorld, locales: StepLocales) {
    world.available.borrow_mut().replace(locales.into_inner());
}

#[given("no available locales are declared")]
fn clear_available(world: &ConfigWorld) {
    world.available.borrow_mut().replace(Vec::new());
}

#[given("an unknown setting is present")]
fn add_unknown_setting(world: &ConfigWorld) {
    *world.unknown_setting.borrow_mut() = true;
}

#[given("the configuration is written to a file")]
fn write_configuration(world: &ConfigWorld) {
    let dir = tempfile::tempdir().unwrap_or_else(|error| panic!("tempdir: {error}"));
    let path = Utf8PathBuf::from_path_buf(dir.path().join("locales.toml"))
        .unwrap_or_else(|raw| panic!("temporary path should be UTF-8: {}", raw.display()));
    fs::write(&path, world.source()).unwrap_or_else(|error| panic!("write: {error}"));
    world.written.borrow_mut().replace((dir, path));
}

#[when("the configuration is loaded")]
fn load_configuration(world: &ConfigWorld) {
    let written = world.written.borrow();
    let loaded = match written.as_ref() {
        Some((_, path)) => FallbackConfig::load_from_path(path),
        None => FallbackConfig::load_with(|| FallbackConfig::from_toml_str(&world.source())),
    };
    let result = loaded
        .and_then(|config| config.resolver())
        .map_err(|error| error.to_string());

    world.result.borrow_mut().replace(result);
}

#[then("loading succeeds")]
fn assert_loaded(world: &ConfigWorld) {
    let _ = world.resolver();
}

#[then("the chain for {locale} is {expected}")]
fn assert_chain(world: &ConfigWorld, locale: String, expected: StepLocales) {
    assert_eq!(order(&world.resolver(), Some(&locale)), expected.into_inner());
}

#[then("the chain without a request is {expected}")]
fn assert_default_chain(world: &ConfigWorld, expected: StepLocales) {
    assert_eq!(order(&world.resolver(), None), expected.into_inner());
}

#[then("loading fails mentioning {snippet}")]
fn assert_failure(world: &ConfigWorld, snippet: StepText) {
    match world.result.borrow().as_ref() {
        Some(Err(message)) => assert!(
            message.contains(snippet.as_ref()),
            "expected `{message}` to mention `{}`",
            snippet.as_ref(),
        ),
        Some(Ok(_)) => panic!("configuration should have been rejected"),
        None => panic!("configuration should have been loaded"),
    }
}

#[scenario(path = "tests/features/config_loading.feature", index = 0)]
fn scenario_complete_configuration(world: ConfigWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/config_loading.feature", index = 1)]
fn scenario_default_not_available(world: ConfigWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/config_loading.feature", index = 2)]
fn scenario_empty_catalogue(world: ConfigWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/config_loading.feature", index = 3)]
fn scenario_unknown_settings(world: ConfigWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/config_loading.feature", index = 4)]
fn scenario_configuration_file(world: ConfigWorld) {
    let _ = world;
}
