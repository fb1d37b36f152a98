//! # Type Registry
//!
//! The [`Registry`] maps sentence type codes to [`Shape`]s and runs the parse
//! pipeline: classify the line, verify the checksum, resolve the shape and bind
//! the raw fields to it.
//!
//! Talker and query type codes are resolved strictly; an unregistered code is an
//! [`Error::UnknownSentenceType`]. Proprietary sentences are resolved in two
//! steps. The manufacturer code selects a [`Manufacturer`], whose [`Dispatch`]
//! strategy then extracts a subtype key from the payload tokens. Whatever can
//! not be resolved falls back to a generic shape, so unknown proprietary
//! sentences still parse and round-trip.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock},
};

use crate::{
    Category, ChecksumMode, Error, Identity, RenderOptions, Result, Sentence, Shape, classify,
    sentences::{proprietary, talker},
};

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::nmea0183);

/// Extracts the subtype key of a proprietary sentence from its payload tokens.
///
/// The tokens are the payload after the `PMMM` manufacturer prefix, split on
/// `,`. A comma right after the manufacturer code shows up as an empty first
/// token.
#[derive(Clone, Copy)]
pub enum Dispatch {
    /// The manufacturer has no subtypes
    None,
    /// The token at this position
    Token(usize),
    /// The first non-empty token among these positions
    FirstNonEmpty(&'static [usize]),
    /// Always this key
    Fixed(&'static str),
    /// A manufacturer specific rule
    Custom(fn(&[String]) -> Option<String>),
}

impl Dispatch {
    /// Extracts the dispatch key, if the tokens carry one.
    ///
    /// ```rust
    /// use nmea0183_records::Dispatch;
    ///
    /// let tokens = ["".to_owned(), "AVR".to_owned(), "1".to_owned()];
    /// assert_eq!(Dispatch::Token(1).key(&tokens), Some("AVR".to_owned()));
    /// assert_eq!(Dispatch::FirstNonEmpty(&[0, 1]).key(&tokens), Some("AVR".to_owned()));
    /// assert_eq!(Dispatch::Token(5).key(&tokens), None);
    /// assert_eq!(Dispatch::None.key(&tokens), None);
    /// ```
    pub fn key(&self, tokens: &[String]) -> Option<String> {
        match *self {
            Dispatch::None => None,
            Dispatch::Token(n) => tokens.get(n).cloned(),
            Dispatch::FirstNonEmpty(positions) => positions
                .iter()
                .filter_map(|&n| tokens.get(n))
                .find(|token| !token.is_empty())
                .cloned(),
            Dispatch::Fixed(key) => Some(key.to_owned()),
            Dispatch::Custom(rule) => rule(tokens),
        }
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::None => f.write_str("None"),
            Dispatch::Token(n) => f.debug_tuple("Token").field(n).finish(),
            Dispatch::FirstNonEmpty(positions) => {
                f.debug_tuple("FirstNonEmpty").field(positions).finish()
            }
            Dispatch::Fixed(key) => f.debug_tuple("Fixed").field(key).finish(),
            Dispatch::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The sub-registry of one manufacturer.
///
/// ```rust
/// use nmea0183_records::{Dispatch, Manufacturer, Shape, fields};
///
/// let acme = Manufacturer::new("ACM", Shape::empty("ACM", "Acme message"))
///     .dispatch(Dispatch::Token(0))
///     .subtype("X", Shape::new("X", "Acme X", fields![("Tag", "tag"), ("Level", "level")]));
///
/// let tokens = ["X".to_owned(), "7".to_owned()];
/// let (subtype, shape) = acme.resolve(&tokens);
/// assert_eq!(subtype.as_deref(), Some("X"));
/// assert_eq!(shape.name(), "X");
///
/// let (subtype, shape) = acme.resolve(&["Y".to_owned()]);
/// assert_eq!(subtype, None);
/// assert_eq!(shape.name(), "ACM");
/// ```
#[derive(Debug, Clone)]
pub struct Manufacturer {
    code: String,
    shape: Arc<Shape>,
    dispatch: Dispatch,
    subtypes: HashMap<String, Arc<Shape>>,
}

impl Manufacturer {
    /// Creates a manufacturer with its generic shape and no subtypes.
    ///
    /// The code is upper-cased.
    pub fn new(code: &str, shape: Shape) -> Self {
        Manufacturer {
            code: code.to_ascii_uppercase(),
            shape: Arc::new(shape),
            dispatch: Dispatch::None,
            subtypes: HashMap::new(),
        }
    }

    /// Sets the subtype extraction rule.
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Registers the shape of a subtype. Subtype keys are matched exactly.
    pub fn subtype(mut self, key: &str, shape: Shape) -> Self {
        self.subtypes.insert(key.to_owned(), Arc::new(shape));
        self
    }

    /// The three character manufacturer code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The generic shape used when no subtype resolves.
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// The subtype extraction rule.
    pub fn dispatch_rule(&self) -> Dispatch {
        self.dispatch
    }

    /// Resolves the payload tokens to a subtype key and its shape.
    ///
    /// The key is `None` when the sentence falls back to the generic shape.
    pub fn resolve(&self, tokens: &[String]) -> (Option<String>, Arc<Shape>) {
        let key = self.dispatch.key(tokens);

        match key.and_then(|key| self.subtypes.get(&key).map(|shape| (key, shape))) {
            Some((key, shape)) => (Some(key), Arc::clone(shape)),
            None => {
                tracing::trace!(
                    manufacturer = %self.code,
                    dispatch = ?self.dispatch,
                    "no subtype matched, using manufacturer shape"
                );
                (None, Arc::clone(&self.shape))
            }
        }
    }
}

/// Maps sentence type codes to shapes.
///
/// Registration is meant to happen once, before parsing starts. The standard
/// tables are available through [`Registry::standard`]; build a registry with
/// [`Registry::nmea0183`] and [`Registry::register`] to add custom sentences.
///
/// ```rust
/// use nmea0183_records::{Category, ChecksumMode, Registry, Shape, Value, coerce, fields};
///
/// let mut registry = Registry::nmea0183();
/// registry.register(
///     Category::Talker,
///     "XDP",
///     Shape::new("XDP", "Example depth", fields![("Depth", "depth", coerce::float)]),
/// );
///
/// let msg = registry.parse("$IIXDP,12.5", ChecksumMode::Optional)?;
/// assert_eq!(msg.get("depth")?, Value::Float(12.5));
/// # Ok::<(), nmea0183_records::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    talker: HashMap<String, Arc<Shape>>,
    query: HashMap<String, Arc<Shape>>,
    manufacturers: HashMap<String, Manufacturer>,
    unknown: Arc<Shape>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl Registry {
    /// An empty registry. Only unknown proprietary sentences parse.
    pub fn new() -> Self {
        Registry {
            talker: HashMap::new(),
            query: HashMap::new(),
            manufacturers: HashMap::new(),
            unknown: Arc::new(Shape::empty("P", "Unknown proprietary sentence")),
        }
    }

    /// A registry holding the standard talker sentences and the known
    /// manufacturers. Every talker sentence type is also a valid query target.
    pub fn nmea0183() -> Self {
        let mut registry = Registry::new();

        for shape in talker::shapes() {
            let name = shape.name();
            registry.register(Category::Query, name, Shape::empty(name, "Query"));
            registry.register(Category::Talker, name, shape);
        }

        for manufacturer in proprietary::manufacturers() {
            registry.register_manufacturer(manufacturer);
        }

        registry
    }

    /// The shared standard registry, built on first use.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    /// Registers a shape under a sentence type code.
    ///
    /// For [`Category::Proprietary`] the key is a manufacturer code. An already
    /// registered manufacturer keeps its dispatch rule and subtypes and only
    /// has its generic shape replaced.
    pub fn register(&mut self, category: Category, key: &str, shape: Shape) {
        let key = key.to_ascii_uppercase();

        match category {
            Category::Talker => {
                self.talker.insert(key, Arc::new(shape));
            }
            Category::Query => {
                self.query.insert(key, Arc::new(shape));
            }
            Category::Proprietary => match self.manufacturers.get_mut(&key) {
                Some(manufacturer) => manufacturer.shape = Arc::new(shape),
                None => {
                    let manufacturer = Manufacturer::new(&key, shape);
                    self.manufacturers.insert(key, manufacturer);
                }
            },
        }
    }

    /// Registers a manufacturer, replacing any with the same code.
    pub fn register_manufacturer(&mut self, manufacturer: Manufacturer) {
        self.manufacturers
            .insert(manufacturer.code.clone(), manufacturer);
    }

    /// Looks up the shape registered under a sentence type code.
    ///
    /// For [`Category::Proprietary`] this is the generic shape of the
    /// manufacturer.
    pub fn resolve(&self, category: Category, key: &str) -> Option<Arc<Shape>> {
        let key = key.to_ascii_uppercase();

        match category {
            Category::Talker => self.talker.get(&key).cloned(),
            Category::Query => self.query.get(&key).cloned(),
            Category::Proprietary => self.manufacturers.get(&key).map(|m| Arc::clone(&m.shape)),
        }
    }

    /// The registered manufacturer with this code.
    pub fn manufacturer(&self, code: &str) -> Option<&Manufacturer> {
        self.manufacturers.get(&code.to_ascii_uppercase())
    }

    /// Resolves a proprietary payload to a subtype key and shape.
    ///
    /// Never fails: an unknown manufacturer resolves to the unknown
    /// proprietary shape, an unknown subtype to the manufacturer's shape.
    pub fn resolve_proprietary(
        &self,
        manufacturer: &str,
        tokens: &[String],
    ) -> (Option<String>, Arc<Shape>) {
        match self.manufacturer(manufacturer) {
            Some(m) => m.resolve(tokens),
            None => {
                tracing::trace!(manufacturer, "unknown manufacturer, using generic shape");
                (None, Arc::clone(&self.unknown))
            }
        }
    }

    /// Parses one line into a [`Sentence`].
    ///
    /// # Errors
    ///
    /// - [`Error::UnrecognizedMessage`] and [`Error::NonAscii`] from [`classify`]
    /// - [`Error::ChecksumMismatch`] and [`Error::ChecksumMissing`] from
    ///   [`Classified::verify`](crate::Classified::verify)
    /// - [`Error::UnknownSentenceType`] if a talker or query type is not registered
    pub fn parse(&self, line: &str, mode: ChecksumMode) -> Result<Sentence> {
        let classified = classify(line)?;
        classified.verify(mode)?;

        let fields = classified.fields();

        match classified.identity {
            Identity::Talker {
                ref sentence_type, ..
            }
            | Identity::Query {
                ref sentence_type, ..
            } => {
                let table = match classified.category() {
                    Category::Query => &self.query,
                    _ => &self.talker,
                };

                let shape = table.get(sentence_type).cloned().ok_or_else(|| {
                    Error::UnknownSentenceType {
                        sentence_type: sentence_type.clone(),
                        line: classified.line.to_owned(),
                    }
                })?;

                Ok(Sentence::from_parts(classified.identity, fields, shape))
            }
            Identity::Proprietary { manufacturer, .. } => {
                let (subtype, shape) = self.resolve_proprietary(&manufacturer, &fields);
                let identity = Identity::Proprietary {
                    manufacturer,
                    subtype,
                };

                Ok(Sentence::from_parts(identity, fields, shape))
            }
        }
    }

    /// Builds an empty talker sentence.
    ///
    /// ```rust
    /// use nmea0183_records::Registry;
    ///
    /// let mut msg = Registry::standard().talker("ii", "mwv")?;
    /// msg.set("wind_angle", 271.0)?;
    /// msg.set("reference", "R")?;
    /// assert_eq!(msg.to_string(), "$IIMWV,271.0,R,,,*18");
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSentenceType`] if the sentence type is not registered.
    pub fn talker(&self, talker: &str, sentence_type: &str) -> Result<Sentence> {
        let identity = Identity::Talker {
            talker: talker.to_owned(),
            sentence_type: sentence_type.to_owned(),
        };
        let shape = self.lookup(Category::Talker, sentence_type, &identity)?;
        Ok(Sentence::new(identity, shape))
    }

    /// Builds a query sentence.
    ///
    /// ```rust
    /// let msg = nmea0183_records::Registry::standard().query("CC", "GP", "GGA")?;
    /// assert_eq!(msg.to_string(), "$CCGPQ,GGA*2B");
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSentenceType`] if the sentence type is not registered.
    pub fn query(&self, talker: &str, listener: &str, sentence_type: &str) -> Result<Sentence> {
        let identity = Identity::Query {
            talker: talker.to_owned(),
            listener: listener.to_owned(),
            sentence_type: sentence_type.to_owned(),
        };
        let shape = self.lookup(Category::Query, sentence_type, &identity)?;
        Ok(Sentence::new(identity, shape))
    }

    /// Builds a proprietary sentence from its payload tokens.
    ///
    /// The tokens are dispatched like a parsed payload and padded with empty
    /// fields up to the length of the resolved shape.
    ///
    /// ```rust
    /// let msg = nmea0183_records::Registry::standard()
    ///     .proprietary("MTK", vec!["220".to_owned(), "200".to_owned()]);
    /// assert_eq!(msg.subtype(), Some("220"));
    /// assert_eq!(msg.to_string(), "$PMTK220,200*2C");
    /// ```
    pub fn proprietary(&self, manufacturer: &str, mut tokens: Vec<String>) -> Sentence {
        let manufacturer = manufacturer.to_ascii_uppercase();
        let (subtype, shape) = self.resolve_proprietary(&manufacturer, &tokens);

        if tokens.len() < shape.len() {
            tokens.resize(shape.len(), String::new());
        }

        let identity = Identity::Proprietary {
            manufacturer,
            subtype,
        };
        Sentence::from_parts(identity, tokens, shape)
    }

    fn lookup(&self, category: Category, key: &str, identity: &Identity) -> Result<Arc<Shape>> {
        self.resolve(category, key)
            .ok_or_else(|| Error::UnknownSentenceType {
                sentence_type: key.to_ascii_uppercase(),
                line: Sentence::new(identity.clone(), Arc::clone(&self.unknown))
                    .render(&RenderOptions::default().checksum(false)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, coerce, fields};

    fn tokens(raw: &str) -> Vec<String> {
        raw.split(',').map(str::to_owned).collect()
    }

    #[test]
    fn test_dispatch_first_non_empty() {
        let rule = Dispatch::FirstNonEmpty(&[0, 1]);
        assert_eq!(rule.key(&tokens("001,604,3")), Some("001".to_owned()));
        assert_eq!(rule.key(&tokens(",PJT,NAD83")), Some("PJT".to_owned()));
        assert_eq!(rule.key(&tokens(",")), None);
        assert_eq!(Dispatch::Fixed("D").key(&[]), Some("D".to_owned()));
    }

    #[test]
    fn test_register_is_case_insensitive() {
        let mut registry = Registry::new();
        registry.register(Category::Talker, "xdp", Shape::empty("XDP", "Example"));

        assert!(registry.resolve(Category::Talker, "XDP").is_some());
        assert!(registry.resolve(Category::Talker, "xdp").is_some());
        assert!(registry.resolve(Category::Query, "XDP").is_none());
    }

    #[test]
    fn test_register_proprietary_keeps_subtypes() {
        let mut registry = Registry::nmea0183();
        registry.register(
            Category::Proprietary,
            "grm",
            Shape::new("GRM", "Replaced", fields![("Tag", "tag")]),
        );

        let generic = registry.resolve(Category::Proprietary, "GRM").unwrap();
        assert_eq!(generic.description(), "Replaced");

        let (subtype, shape) = registry.resolve_proprietary("GRM", &tokens("E,15.0,M"));
        assert_eq!(subtype.as_deref(), Some("E"));
        assert_eq!(shape.name(), "E");
    }

    #[test]
    fn test_unknown_manufacturer() {
        let registry = Registry::new();
        let (subtype, shape) = registry.resolve_proprietary("ZZZ", &tokens("ABC,1"));
        assert_eq!(subtype, None);
        assert!(shape.is_empty());
    }

    #[test]
    fn test_empty_registry_rejects_talker() {
        let registry = Registry::new();
        let err = registry
            .parse("$GPGGA,184353.07", ChecksumMode::Optional)
            .unwrap_err();
        assert!(err.is_sentence_type_error());
        assert_eq!(err.line(), Some("$GPGGA,184353.07"));
    }

    #[test]
    fn test_talker_unknown_type() {
        let err = Registry::standard().talker("GP", "ABC").unwrap_err();
        assert!(err.is_sentence_type_error());
    }

    #[test]
    fn test_custom_manufacturer() {
        let mut registry = Registry::new();
        registry.register_manufacturer(
            Manufacturer::new("acm", Shape::empty("ACM", "Acme"))
                .dispatch(Dispatch::Token(0))
                .subtype(
                    "LVL",
                    Shape::new(
                        "LVL",
                        "Level",
                        fields![("Tag", "tag"), ("Level", "level", coerce::float)],
                    ),
                ),
        );

        let msg = registry.parse("$PACMLVL,3.5", ChecksumMode::Optional).unwrap();
        assert_eq!(msg.manufacturer(), Some("ACM"));
        assert_eq!(msg.subtype(), Some("LVL"));
        assert_eq!(msg.get("level"), Ok(Value::Float(3.5)));
    }

    #[test]
    fn test_standard_registry_covers_queries() {
        let registry = Registry::standard();
        for shape in talker::shapes() {
            assert!(
                registry.resolve(Category::Query, shape.name()).is_some(),
                "Failed: {}",
                shape.name()
            );
        }
    }
}
