use std::path::PathBuf;

use crate::defaults;
use crate::env::{self, EnvVars};
use crate::error::LayerfigError;
use crate::file;
use crate::flags;
use crate::types::{FlagMap, Settings};

/// Entry point for building a loading pipeline.
pub struct Layerfig;

impl Layerfig {
    pub fn builder() -> LayerfigBuilder {
        LayerfigBuilder::new()
    }
}

/// Load `target` through the default pipeline:
/// defaults → command-line arguments → declared config file → environment.
pub fn load<C: Settings>(target: &mut C) -> Result<(), LayerfigError> {
    Layerfig::builder().load(target)
}

/// One unit of work in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Fill fields that have no explicit value from their declared defaults.
    Defaults,
    /// Bind command-line flags to fields with a `cli`/`short_cli` key.
    Args(ArgSource),
    /// Merge a config file. `None` uses [`Settings::config_file`].
    File(Option<PathBuf>),
    /// Bind environment variables to fields with an `env` name.
    Env,
}

/// Where the arguments step takes its flags from.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgSource {
    /// The process arguments, minus the program name.
    Process,
    /// An explicit argument list, tokenized at load time.
    Custom(Vec<String>),
    /// Flags parsed elsewhere (e.g. by the clap adapter).
    Parsed(FlagMap),
}

impl Step {
    /// The pipeline used when no step was configured.
    pub fn default_pipeline() -> Vec<Step> {
        vec![
            Step::Defaults,
            Step::Args(ArgSource::Process),
            Step::File(None),
            Step::Env,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Step::Defaults => "defaults",
            Step::Args(_) => "args",
            Step::File(_) => "file",
            Step::Env => "env",
        }
    }
}

/// Builder for an ordered loading pipeline.
///
/// Each source method appends a step; steps run in the order they were added
/// and later steps override earlier ones field by field. A builder with no
/// steps runs [`Step::default_pipeline`].
///
/// Process arguments and environment are read when [`load`](Self::load)
/// runs unless snapshots were injected with
/// [`process_args()`](Self::process_args) and [`env_vars()`](Self::env_vars).
pub struct LayerfigBuilder {
    steps: Vec<Step>,
    process_args: Option<Vec<String>>,
    env_vars: Option<EnvVars>,
    strict: bool,
}

impl LayerfigBuilder {
    fn new() -> Self {
        Self {
            steps: Vec::new(),
            process_args: None,
            env_vars: None,
            strict: false,
        }
    }

    /// Apply declared defaults.
    pub fn defaults(self) -> Self {
        self.step(Step::Defaults)
    }

    /// Apply flags from the process arguments.
    pub fn args(self) -> Self {
        self.step(Step::Args(ArgSource::Process))
    }

    /// Apply flags from an explicit argument list (no program name).
    pub fn custom_args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.step(Step::Args(ArgSource::Custom(args)))
    }

    /// Apply flags that were already parsed into a [`FlagMap`].
    pub fn parsed_flags(self, flags: FlagMap) -> Self {
        self.step(Step::Args(ArgSource::Parsed(flags)))
    }

    /// Merge the config file at `path`. An empty path behaves like
    /// [`declared_file()`](Self::declared_file).
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.step(Step::File(Some(path.into())))
    }

    /// Merge the config file the target points at through
    /// [`Settings::config_file`], if any.
    pub fn declared_file(self) -> Self {
        self.step(Step::File(None))
    }

    /// Apply environment variables.
    pub fn env(self) -> Self {
        self.step(Step::Env)
    }

    /// Append an arbitrary step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Use `args` instead of the real process arguments (program name excluded).
    pub fn process_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.process_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Use `vars` instead of the real process environment.
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, unknown keys in config files produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The steps [`load`](Self::load) will run, in order.
    pub fn effective_steps(&self) -> Vec<Step> {
        if self.steps.is_empty() {
            return Step::default_pipeline();
        }
        self.steps.clone()
    }

    fn effective_process_args(&self) -> Vec<String> {
        match &self.process_args {
            Some(args) => args.clone(),
            None => std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        }
    }

    fn effective_env_vars(&self) -> EnvVars {
        match &self.env_vars {
            Some(vars) => vars.clone(),
            None => env::process_env(),
        }
    }

    /// Run the pipeline against `target`.
    ///
    /// Stops at the first failing step and returns its error. Fields written
    /// by earlier steps keep their new values.
    pub fn load<C: Settings>(self, target: &mut C) -> Result<(), LayerfigError> {
        // the declared path as the caller set it, in case a rebuild dropped it
        let declared = target.config_file();
        for step in self.effective_steps() {
            tracing::debug!(step = step.name(), "applying configuration step");
            self.apply(&step, target, declared.as_ref())?;
        }
        Ok(())
    }

    fn apply<C: Settings>(
        &self,
        step: &Step,
        target: &mut C,
        declared: Option<&PathBuf>,
    ) -> Result<(), LayerfigError> {
        match step {
            Step::Defaults => defaults::apply_defaults(target),
            Step::Args(source) => {
                let flags = match source {
                    ArgSource::Process => flags::tokenize(self.effective_process_args())?,
                    ArgSource::Custom(args) => flags::tokenize(args)?,
                    ArgSource::Parsed(flags) => flags.clone(),
                };
                flags::apply_flags(target, &flags)
            }
            Step::File(path) => {
                let path = path
                    .clone()
                    .filter(|p| !p.as_os_str().is_empty())
                    .or_else(|| target.config_file().filter(|p| !p.as_os_str().is_empty()))
                    .or_else(|| declared.cloned())
                    .filter(|p| !p.as_os_str().is_empty());
                match path {
                    Some(path) => file::apply_file(target, &path, self.strict),
                    None => {
                        tracing::debug!("no config file to load");
                        Ok(())
                    }
                }
            }
            Step::Env => env::apply_env(target, &self.effective_env_vars()),
        }
    }
}
