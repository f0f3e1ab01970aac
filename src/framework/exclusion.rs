//! # Exclusion Sets
//!
//! Some fields carry free-form JSON whose members are *not* resources: a job
//! template's survey spec, a host's variables, a job's extra vars. Wrapping
//! those into records would only get in the way, so a type can declare the
//! field paths that must stay raw.
//!
//! ## Path syntax
//!
//! A path is a chain of accessor names separated by `#`:
//!
//! - `"survey_spec"` keeps the top-level `survey_spec` field raw.
//! - `"vars#ansible_host"` wraps `vars` as usual, but inside it keeps
//!   `ansible_host` raw.
//!
//! When a record builds its children it [descends](ExclusionSet::descend) one
//! level: everything up to and including the first `#` is stripped and paths
//! without a separator are dropped. `"vars#ansible_host"` therefore becomes
//! `"ansible_host"` one level down and disappears one level further.
//!
//! ## Inheritance
//!
//! Types declare their own paths through [`Schema::EXCLUDE`] and name the set
//! they extend through [`Schema::parent_exclusions`]. The effective set is
//! composed once per type and cached for the life of the process.

use super::naming::snake_case;
use std::any::TypeId;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, LazyLock, RwLock};
use tracing::debug;

/// Separator between the levels of an exclusion path.
pub const SEPARATOR: char = '#';

/// An immutable-by-convention set of normalized field paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: BTreeSet<String>,
}

impl ExclusionSet {
    /// Builds a set from raw paths, normalizing each one.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.declare(paths);
        set
    }

    /// Merges more paths into this set.
    pub fn declare<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.paths
            .extend(paths.into_iter().filter_map(|p| normalize(p.as_ref())));
    }

    /// Set union; neither operand changes.
    pub fn union(&self, other: &ExclusionSet) -> ExclusionSet {
        ExclusionSet {
            paths: self.paths.union(&other.paths).cloned().collect(),
        }
    }

    /// The set that applies to records nested one level below.
    pub fn descend(&self) -> ExclusionSet {
        ExclusionSet {
            paths: self
                .paths
                .iter()
                .filter_map(|p| p.split_once(SEPARATOR).map(|(_, rest)| rest.to_string()))
                .collect(),
        }
    }

    /// Whether the field with this accessor name stays raw at this level.
    pub fn contains(&self, accessor: &str) -> bool {
        self.paths.contains(accessor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// `.` is accepted as an alias of `#`; segments are stored in accessor form.
fn normalize(path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    let segments: Vec<String> = path
        .split([SEPARATOR, '.'])
        .map(|segment| snake_case(segment.trim()))
        .collect();
    if segments.iter().any(String::is_empty) {
        return None;
    }
    Some(segments.join(&SEPARATOR.to_string()))
}

/// A type whose documents are wrapped with a fixed exclusion set.
///
/// # Example
///
/// ```rust
/// use tower_client::framework::{Record, Schema};
///
/// struct Base;
/// impl Schema for Base {
///     const EXCLUDE: &'static [&'static str] = &["extra_vars"];
/// }
///
/// struct Host;
/// impl Schema for Host {
///     const EXCLUDE: &'static [&'static str] = &["vars#ansible_host"];
///     fn parent_exclusions() -> std::sync::Arc<tower_client::framework::ExclusionSet> {
///         Base::exclusions()
///     }
/// }
///
/// let set = Host::exclusions();
/// assert!(set.contains("extra_vars"));
/// assert!(set.descend().contains("ansible_host"));
///
/// let host = Record::parse_as::<Host>(r#"{"vars": {"ansibleHost": {"ip": "10.0.0.1"}}}"#).unwrap();
/// let vars = host.attr("vars").unwrap().as_record().unwrap();
/// assert!(vars.attr("ansible_host").unwrap().as_record().is_none());
/// ```
pub trait Schema: 'static {
    /// Paths declared by this type itself.
    const EXCLUDE: &'static [&'static str] = &[];

    /// The effective set of the type this one extends.
    fn parent_exclusions() -> Arc<ExclusionSet> {
        Arc::new(ExclusionSet::default())
    }

    /// The effective set: own paths plus everything inherited.
    fn exclusions() -> Arc<ExclusionSet>
    where
        Self: Sized,
    {
        effective::<Self>()
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, Arc<ExclusionSet>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn effective<S: Schema>() -> Arc<ExclusionSet> {
    let type_id = TypeId::of::<S>();
    if let Some(set) = REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(&type_id)
    {
        return set.clone();
    }

    // Computed outside the lock: resolving the parent re-enters the registry.
    let computed = S::parent_exclusions().union(&ExclusionSet::new(S::EXCLUDE));
    let mut registry = REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let published = registry
        .entry(type_id)
        .or_insert_with(|| {
            debug!(
                schema = std::any::type_name::<S>(),
                paths = computed.len(),
                "Exclusions resolved"
            );
            Arc::new(computed)
        })
        .clone();
    published
}
