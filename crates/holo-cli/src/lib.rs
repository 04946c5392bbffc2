//! # holo-cli
//!
//! Command-line surface for the holo engine. Vectors are read from and
//! written as the JSON interchange format
//! `{ "dimensions": [...], "semanticBinding": "...", "phiRatio": ... }`.
//!
//! Argument parsing lives here rather than in `main.rs` so it can be
//! tested without spawning a process.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use holo_bus::Engine;
use holo_core::{Backend, EngineConfig, HoloError, HoloResult, HoloVector};

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: holo <COMMAND> [OPTIONS]

Commands:
  encode --label <L> [--props <JSON array>]   Encode a label into a vector
  bind <FILE> <FILE> [FILE...]                Bind vectors (left fold)
  unbind <BOUND> <KNOWN>                      Recover the operand bound with KNOWN
  superpose <FILE> [FILE...]                  Bundle vectors
  similarity <A> <B>                          Cosine similarity

Options:
  --dim <N>              Vector dimension (default: 1024, or the input length)
  --backend <fft|naive>  Spectral backend (default: fft)
  --config <PATH>        JSON engine configuration; flags override it
  --help                 Show this help";

/// A parsed subcommand.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Encode { label: String, properties: Vec<Value> },
    Bind { inputs: Vec<PathBuf> },
    Unbind { bound: PathBuf, known: PathBuf },
    Superpose { inputs: Vec<PathBuf> },
    Similarity { a: PathBuf, b: PathBuf },
    Help,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    /// Explicit `--dim`.
    pub dimension: Option<usize>,
    /// Explicit `--backend`.
    pub backend: Option<Backend>,
    /// `--config` file.
    pub config_path: Option<PathBuf>,
}

fn usage_error(message: impl Into<String>) -> HoloError {
    HoloError::InvalidConfig {
        message: message.into(),
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> HoloResult<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| usage_error(format!("{flag} requires a value")))
}

/// Parses arguments (without the program name).
///
/// # Errors
///
/// Returns [`HoloError::InvalidConfig`] for unknown flags, missing values,
/// arguments that do not apply to the subcommand, or
/// wrong operand counts, and [`HoloError::InvalidBackend`] for a bad
/// `--backend`.
///
/// # Example
///
/// ```
/// use holo_cli::{parse_args, Command};
///
/// let args: Vec<String> = ["encode", "--label", "cat", "--dim", "64"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let inv = parse_args(&args).unwrap();
/// assert_eq!(inv.dimension, Some(64));
/// assert!(matches!(inv.command, Command::Encode { ref label, .. } if label == "cat"));
/// ```
pub fn parse_args(args: &[String]) -> HoloResult<Invocation> {
    let mut subcommand: Option<&str> = None;
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut label: Option<String> = None;
    let mut properties: Option<Vec<Value>> = None;
    let mut dimension = None;
    let mut backend = None;
    let mut config_path = None;
    let mut help = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--label" => label = Some(flag_value(args, &mut i, "--label")?.to_string()),
            "--props" => {
                let raw = flag_value(args, &mut i, "--props")?;
                properties = Some(
                    serde_json::from_str(raw)
                        .map_err(|e| usage_error(format!("--props must be a JSON array: {e}")))?,
                );
            }
            "--dim" => {
                let raw = flag_value(args, &mut i, "--dim")?;
                let n: usize = raw
                    .parse()
                    .map_err(|_| usage_error(format!("--dim expects an integer, got {raw:?}")))?;
                dimension = Some(n);
            }
            "--backend" => backend = Some(flag_value(args, &mut i, "--backend")?.parse()?),
            "--config" => config_path = Some(PathBuf::from(flag_value(args, &mut i, "--config")?)),
            "--help" | "-h" => help = true,
            flag if flag.starts_with("--") => {
                return Err(usage_error(format!("unknown argument: {flag}")));
            }
            word if subcommand.is_none() => subcommand = Some(word),
            path => positional.push(PathBuf::from(path)),
        }
        i += 1;
    }

    let is_encode = subcommand == Some("encode");
    if !help && subcommand.is_some() {
        if is_encode && !positional.is_empty() {
            return Err(usage_error(format!(
                "encode takes no vector files, got {}",
                positional.len()
            )));
        }
        if !is_encode && (label.is_some() || properties.is_some()) {
            return Err(usage_error("--label and --props only apply to encode"));
        }
    }

    let command = if help {
        Command::Help
    } else {
        match subcommand {
            None => Command::Help,
            Some("encode") => Command::Encode {
                label: label.ok_or_else(|| usage_error("encode requires --label"))?,
                properties: properties.unwrap_or_default(),
            },
            Some("bind") => Command::Bind { inputs: positional },
            Some("superpose") => Command::Superpose { inputs: positional },
            Some("unbind") => {
                let [bound, known] = two_paths("unbind", positional)?;
                Command::Unbind { bound, known }
            }
            Some("similarity") => {
                let [a, b] = two_paths("similarity", positional)?;
                Command::Similarity { a, b }
            }
            Some(other) => return Err(usage_error(format!("unknown command: {other}"))),
        }
    };

    Ok(Invocation {
        command,
        dimension,
        backend,
        config_path,
    })
}

fn two_paths(command: &str, paths: Vec<PathBuf>) -> HoloResult<[PathBuf; 2]> {
    <[PathBuf; 2]>::try_from(paths).map_err(|got| {
        usage_error(format!(
            "{command} takes exactly two vector files, got {}",
            got.len()
        ))
    })
}

/// Reads one vector file in the interchange format.
///
/// # Errors
///
/// Returns [`HoloError::Io`] if the file cannot be read and
/// [`HoloError::Serialization`] if it is not a valid vector document.
pub fn read_vector(path: &Path) -> HoloResult<HoloVector> {
    let text = fs::read_to_string(path).map_err(|e| HoloError::Io {
        message: format!("{}: {e}", path.display()),
    })?;
    HoloVector::from_json(&text)
}

impl Invocation {
    /// Resolves the engine configuration: defaults, then `--config`, then
    /// flags. With no explicit dimension anywhere, `fallback_dimension`
    /// (the first input vector's length) is used when available.
    ///
    /// # Errors
    ///
    /// Returns file or parse errors from `--config`, and any validation error.
    pub fn engine_config(&self, fallback_dimension: Option<usize>) -> HoloResult<EngineConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| HoloError::Io {
                    message: format!("{}: {e}", path.display()),
                })?;
                EngineConfig::from_json_str(&text)?
            }
            None => match fallback_dimension {
                Some(n) => EngineConfig::default().with_dimension(n),
                None => EngineConfig::default(),
            },
        };
        if let Some(n) = self.dimension {
            config.dimension = n;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs a parsed invocation and returns what should be printed on stdout.
///
/// # Errors
///
/// Returns any engine, file, or parse error.
pub fn run(invocation: &Invocation) -> HoloResult<String> {
    let inputs: Vec<&PathBuf> = match &invocation.command {
        Command::Help => return Ok(USAGE.to_string()),
        Command::Encode { .. } => Vec::new(),
        Command::Bind { inputs } | Command::Superpose { inputs } => inputs.iter().collect(),
        Command::Unbind { bound, known } => vec![bound, known],
        Command::Similarity { a, b } => vec![a, b],
    };
    let vectors = inputs
        .into_iter()
        .map(|p| read_vector(p))
        .collect::<HoloResult<Vec<_>>>()?;

    let config = invocation.engine_config(vectors.first().map(HoloVector::len))?;
    let engine = Engine::new(config)?;
    tracing::debug!(
        dimension = engine.dimension(),
        backend = %engine.backend(),
        inputs = vectors.len(),
        "running command"
    );

    match &invocation.command {
        Command::Help => Ok(USAGE.to_string()),
        Command::Encode { label, properties } => engine.encode(label, properties).to_json(),
        Command::Bind { .. } => engine.bind(&vectors)?.to_json(),
        Command::Superpose { .. } => engine.superpose(&vectors)?.to_json(),
        Command::Unbind { .. } => engine.unbind(&vectors[0], &vectors[1])?.to_json(),
        Command::Similarity { .. } => {
            let similarity = engine.similarity(&vectors[0], &vectors[1])?;
            Ok(json!({ "similarity": similarity }).to_string())
        }
    }
}
