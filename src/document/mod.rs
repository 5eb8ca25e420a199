//! JSON input documents and output rendering.
//!
//! Input shape:
//! ```json
//! {
//!   "keys": ["5", "10"],
//!   "0": { "base": "10", "value": "3" },
//!   "2": { "base": "16", "value": "1" }
//! }
//! ```
//! - `keys` lists the evaluation points. An entry is a point when, after
//!   leading whitespace and an optional sign, it starts with a decimal digit.
//!   Other entries are ignored. Numeric entries must be integral.
//! - A top-level key written as a canonical non-negative integer (`"0"`,
//!   `"12"`) names a coefficient power. A key that merely starts with digits
//!   (`"3abc"`, `"007"`) raises the degree to that power without supplying a
//!   coefficient, so the power defaults to zero. Any other key is ignored.
//!
//! The output is an object keyed by point literal, see `solver::Solution`.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::SolverConfig;
use crate::solver::{self, Coefficient, Solution, SolveError};

/// Errors for loading and rendering documents.
#[derive(Debug)]
pub enum DocumentError {
    /// Reading the input failed.
    Io(std::io::Error),
    /// The input is not valid JSON, or output serialization failed.
    Json(serde_json::Error),
    /// The top level is not an object.
    NotAnObject,
    /// `keys` is absent.
    MissingKeys,
    /// `keys` is not an array of strings or numbers.
    InvalidKeys,
    /// A numeric `keys` entry is not a non-negative integer.
    NonIntegralKey(String),
    /// The coefficient under `key` is not an object with a string `value`.
    InvalidCoefficient { key: String },
    /// The coefficient under `key` has a base that is not a decimal integer.
    InvalidBase { key: String },
    /// Solving failed.
    Solve(SolveError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "I/O error: {}", e),
            DocumentError::Json(e) => write!(f, "JSON error: {}", e),
            DocumentError::NotAnObject => write!(f, "Input document must be a JSON object"),
            DocumentError::MissingKeys => write!(f, "Input document has no \"keys\" field"),
            DocumentError::InvalidKeys => {
                write!(f, "\"keys\" must be an array of strings or numbers")
            }
            DocumentError::NonIntegralKey(key) => {
                write!(f, "Numeric key {} is not a non-negative integer", key)
            }
            DocumentError::InvalidCoefficient { key } => {
                write!(f, "Coefficient {:?} must be an object with a string \"value\"", key)
            }
            DocumentError::InvalidBase { key } => {
                write!(f, "Coefficient {:?} has a malformed base", key)
            }
            DocumentError::Solve(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io(e) => Some(e),
            DocumentError::Json(e) => Some(e),
            DocumentError::Solve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::Io(err)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Json(err)
    }
}

impl From<SolveError> for DocumentError {
    fn from(err: SolveError) -> Self {
        DocumentError::Solve(err)
    }
}

/// A parsed input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDocument {
    /// Power → coefficient.
    pub coefficients: BTreeMap<usize, Coefficient>,
    /// Evaluation point literals, in document order.
    pub points: Vec<String>,
}

impl InputDocument {
    pub fn from_json_str(s: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let obj = match value {
            Value::Object(obj) => obj,
            _ => return Err(DocumentError::NotAnObject),
        };
        Ok(Self {
            points: parse_points(&obj)?,
            coefficients: parse_coefficients(&obj)?,
        })
    }

    /// Solves the document.
    pub fn solve(&self, config: &SolverConfig) -> Result<Solution, SolveError> {
        solver::solve(&self.coefficients, &self.points, config)
    }
}

/// Reads and parses the document at `path`.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<InputDocument, DocumentError> {
    let path = path.as_ref();
    log::debug!("Loading input from {}", path.display());
    let file = std::fs::File::open(path)?;
    InputDocument::from_reader(std::io::BufReader::new(file))
}

/// Loads `config.input_path`, solves it and renders the result.
pub fn run(config: &SolverConfig) -> Result<String, DocumentError> {
    let doc = load_input(&config.input_path)?;
    log::info!(
        "Loaded {} coefficient(s) and {} point(s)",
        doc.coefficients.len(),
        doc.points.len()
    );
    let solution = doc.solve(config)?;
    render(&solution, config.pretty)
}

/// Serializes a solution as a JSON object.
pub fn render(solution: &Solution, pretty: bool) -> Result<String, DocumentError> {
    let out = if pretty {
        serde_json::to_string_pretty(solution)?
    } else {
        serde_json::to_string(solution)?
    };
    Ok(out)
}

/// How a top-level key relates to the coefficient powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PowerKey {
    /// Canonical decimal form of `power`; carries that coefficient.
    Coefficient(usize),
    /// Starts with the digits of `power` but is not its canonical form.
    /// Counts toward the degree only.
    DegreeOnly(usize),
}

/// Splits `s` into an optional sign and the leading run of ASCII digits,
/// after skipping leading whitespace. Returns `None` if there are no digits.
fn leading_integer(s: &str) -> Option<(bool, &str)> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    Some((negative, &rest[..end]))
}

fn classify_key(key: &str) -> Option<PowerKey> {
    let (negative, digits) = leading_integer(key)?;
    if negative {
        return None;
    }
    // Too large for usize: let the degree limit reject it.
    let power = digits.parse().unwrap_or(usize::MAX);
    if key == digits && (digits == "0" || !digits.starts_with('0')) {
        Some(PowerKey::Coefficient(power))
    } else {
        Some(PowerKey::DegreeOnly(power))
    }
}

/// A point candidate starts, after leading whitespace and an optional sign,
/// with a decimal digit.
fn is_point_candidate(s: &str) -> bool {
    leading_integer(s).is_some()
}

/// Renders a numeric `keys` entry as the integer literal it denotes.
fn integral_literal(n: &serde_json::Number) -> Result<String, DocumentError> {
    if let Some(u) = n.as_u64() {
        return Ok(u.to_string());
    }
    if let Some(i) = n.as_i64() {
        return Ok(i.to_string());
    }
    match n.as_f64() {
        // 2^64 is exactly representable; anything below it with no fraction fits.
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f < 18_446_744_073_709_551_616.0 => {
            Ok((f as u64).to_string())
        }
        _ => Err(DocumentError::NonIntegralKey(n.to_string())),
    }
}

fn parse_points(obj: &Map<String, Value>) -> Result<Vec<String>, DocumentError> {
    let keys = obj.get("keys").ok_or(DocumentError::MissingKeys)?;
    let items = keys.as_array().ok_or(DocumentError::InvalidKeys)?;

    let mut points = Vec::with_capacity(items.len());
    for item in items {
        let literal = match item {
            Value::String(s) => s.clone(),
            Value::Number(n) => integral_literal(n)?,
            _ => return Err(DocumentError::InvalidKeys),
        };
        if is_point_candidate(&literal) {
            points.push(literal);
        } else {
            log::debug!("Ignoring non-numeric key {:?}", literal);
        }
    }
    Ok(points)
}

fn parse_coefficients(
    obj: &Map<String, Value>,
) -> Result<BTreeMap<usize, Coefficient>, DocumentError> {
    let mut coefficients = BTreeMap::new();
    let mut degree_only = Vec::new();
    for (key, value) in obj {
        let power = match classify_key(key) {
            Some(PowerKey::Coefficient(power)) => power,
            Some(PowerKey::DegreeOnly(power)) => {
                log::debug!("Key {:?} raises degree to {} without a coefficient", key, power);
                degree_only.push(power);
                continue;
            }
            None => continue,
        };
        let entry = value
            .as_object()
            .ok_or_else(|| DocumentError::InvalidCoefficient { key: key.clone() })?;
        let digits = entry
            .get("value")
            .and_then(Value::as_str)
            .ok_or_else(|| DocumentError::InvalidCoefficient { key: key.clone() })?;
        let base = entry
            .get("base")
            .and_then(parse_base)
            .ok_or_else(|| DocumentError::InvalidBase { key: key.clone() })?;
        coefficients.insert(power, Coefficient::new(base, digits));
    }
    for power in degree_only {
        coefficients
            .entry(power)
            .or_insert_with(|| Coefficient::new(10, "0"));
    }
    Ok(coefficients)
}

/// Bases may be written as a JSON string or number. Range checks happen at
/// decode time.
fn parse_base(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|b| u32::try_from(b).ok()),
        _ => None,
    }
}
