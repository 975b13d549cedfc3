use std::collections::VecDeque;

use clap::Parser;
use matchdraw_config::DrawConfig;

use super::*;
use crate::args::Args;

#[derive(Default)]
struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    trials: VecDeque<u64>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    fn new(confirms: &[bool], trials: &[u64]) -> Self {
        Self {
            confirms: confirms.iter().copied().collect(),
            trials: trials.iter().copied().collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        self.questions.push(question.to_string());
        Ok(self.confirms.pop_front().expect("unexpected confirm"))
    }

    fn trials(&mut self) -> Result<u64, CliError> {
        self.questions.push("trials".to_string());
        Ok(self.trials.pop_front().expect("unexpected trials prompt"))
    }
}

fn config_with(args: &[&str]) -> DrawConfig {
    let mut config = DrawConfig::champions_league_2022().unwrap();
    let mut argv = vec!["matchdraw"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap().apply(&mut config);
    config
}

#[test]
fn test_prompts_when_nothing_is_configured() {
    let config = config_with(&[]);
    let mut prompter = ScriptedPrompter::new(&[true], &[5000]);

    let settings = RunSettings::resolve(&config, &mut prompter).unwrap();

    assert_eq!(
        settings,
        RunSettings {
            trials: 5000,
            load_cache: true
        }
    );
    assert_eq!(prompter.questions.len(), 2);
    assert!(prompter.questions[0].contains("matchdraw-cache.bin"));
    assert_eq!(prompter.questions[1], "trials");
}

#[test]
fn test_flags_skip_prompts() {
    let config = config_with(&["--trials", "250", "--no-load-cache", "--save-cache"]);
    let mut prompter = ScriptedPrompter::default();

    let settings = RunSettings::resolve(&config, &mut prompter).unwrap();
    let save = should_save(&config, settings.load_cache, &mut prompter).unwrap();

    assert_eq!(settings.trials, 250);
    assert!(!settings.load_cache);
    assert!(save);
    assert!(prompter.questions.is_empty());
}

#[test]
fn test_flags_override_config_file() {
    let mut config = DrawConfig::champions_league_2022()
        .unwrap()
        .with_trials(10)
        .with_random_seed(1);
    config.cache.save = Some(true);
    Args::try_parse_from(["matchdraw", "-n", "99", "--seed", "7", "--no-save-cache"])
        .unwrap()
        .apply(&mut config);

    assert_eq!(config.run.trials, Some(99));
    assert_eq!(config.run.random_seed, Some(7));
    assert_eq!(config.cache.save, Some(false));
}

#[test]
fn test_save_prompt_names_cache_path() {
    let config = config_with(&["--cache", "draws/ucl.bin"]);
    let mut prompter = ScriptedPrompter::new(&[false], &[]);

    let save = should_save(&config, false, &mut prompter).unwrap();

    assert!(!save);
    assert_eq!(prompter.questions.len(), 1);
    assert!(prompter.questions[0].contains("draws/ucl.bin"));
}

#[test]
fn test_zero_trials_rejected_by_parser() {
    assert!(Args::try_parse_from(["matchdraw", "--trials", "0"]).is_err());
}

#[test]
fn test_conflicting_cache_flags_rejected() {
    assert!(Args::try_parse_from(["matchdraw", "--load-cache", "--no-load-cache"]).is_err());
    assert!(Args::try_parse_from(["matchdraw", "--save-cache", "--no-save-cache"]).is_err());
}

#[test]
fn test_precision_override_is_validated() {
    let config = config_with(&["--precision", "12"]);
    assert!(config.validate().is_err());
}
