//! Runtime selection of the engine behind [`DocumentBuilder`].

use crate::error::PdfsmithError;
use pdfsmith_layout::LayoutConfig;
use pdfsmith_render_core::DocumentBuilder;
use pdfsmith_render_lopdf::{BACKEND_NAME as LOPDF_BACKEND, LopdfBuilder};
use pdfsmith_types::DocumentInfo;
use std::collections::BTreeMap;
use std::fmt;

/// Builds a fresh, empty document for one backend.
pub type BackendConstructor = fn(&LayoutConfig, DocumentInfo) -> Box<dyn DocumentBuilder>;

fn lopdf_constructor(config: &LayoutConfig, info: DocumentInfo) -> Box<dyn DocumentBuilder> {
    Box::new(LopdfBuilder::new(*config).with_info(info))
}

/// Normalizes a backend identifier for lookup.
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Maps backend identifiers to their constructors.
///
/// The default registry knows the built-in `"lopdf"` backend. Identifiers are
/// matched case-insensitively.
#[derive(Clone)]
pub struct BackendRegistry {
    constructors: BTreeMap<String, BackendConstructor>,
}

impl Default for BackendRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(LOPDF_BACKEND, lopdf_constructor);
        registry
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry").field("backends", &self.names()).finish()
    }
}

impl BackendRegistry {
    /// A registry without any backend, not even the built-in one.
    pub fn empty() -> Self {
        Self { constructors: BTreeMap::new() }
    }

    /// Registers `constructor` under `name`, returning the one it replaced.
    pub fn register(&mut self, name: &str, constructor: BackendConstructor) -> Option<BackendConstructor> {
        let key = normalize(name);
        log::debug!("Registering document backend '{}'", key);
        self.constructors.insert(key, constructor)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&normalize(name))
    }

    /// Registered identifiers in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    fn resolve(&self, name: &str) -> Result<(String, BackendConstructor), PdfsmithError> {
        let key = normalize(name);
        match self.constructors.get(&key) {
            Some(constructor) => Ok((key, *constructor)),
            None => Err(PdfsmithError::UnknownBackend {
                name: name.to_string(),
                available: self.names(),
            }),
        }
    }

    /// Creates a builder of the named backend in one step.
    pub fn create(&self, name: &str, config: &LayoutConfig) -> Result<Box<dyn DocumentBuilder>, PdfsmithError> {
        let (_, constructor) = self.resolve(name)?;
        Ok(constructor(config, DocumentInfo::default()))
    }
}

/// Hands out fresh [`DocumentBuilder`]s of one backend.
///
/// The backend name is resolved once, at construction. The provider holds no
/// document state, so it can create any number of independent builders.
#[derive(Clone)]
pub struct BackendProvider {
    name: String,
    constructor: BackendConstructor,
    config: LayoutConfig,
}

impl fmt::Debug for BackendProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendProvider")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for BackendProvider {
    fn default() -> Self {
        Self {
            name: LOPDF_BACKEND.to_string(),
            constructor: lopdf_constructor,
            config: LayoutConfig::default(),
        }
    }
}

impl BackendProvider {
    /// Resolves `name` against the built-in backends.
    pub fn new(name: &str) -> Result<Self, PdfsmithError> {
        Self::with_registry(name, &BackendRegistry::default())
    }

    /// Resolves `name` against a caller-supplied registry.
    pub fn with_registry(name: &str, registry: &BackendRegistry) -> Result<Self, PdfsmithError> {
        let (name, constructor) = registry.resolve(name)?;
        Ok(Self {
            name,
            constructor,
            config: LayoutConfig::default(),
        })
    }

    /// Replaces the layout used by [`create`](Self::create).
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn create(&self) -> Box<dyn DocumentBuilder> {
        self.create_with(&self.config)
    }

    pub fn create_with(&self, config: &LayoutConfig) -> Box<dyn DocumentBuilder> {
        self.create_with_info(config, DocumentInfo::default())
    }

    pub fn create_with_info(&self, config: &LayoutConfig, info: DocumentInfo) -> Box<dyn DocumentBuilder> {
        log::debug!("Creating '{}' document builder", self.name);
        (self.constructor)(config, info)
    }
}
