use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `jx_*` crate as seen from the
/// caller's Cargo.toml.
///
/// Derived code is expanded inside the user's crate, which may depend on
/// `jx_reflect` directly or only through one of the facade crates.
///
/// # Example
///
/// ```rust
/// # use jx_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("jx_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `jx_` and a facade that
///    re-exports it is listed, return `::facade::short_name`
///    (e.g. `jx_reflect` -> `::jx_core::reflect` or `::jx_json::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// A crate that references itself should add `extern crate self as name;`
/// in its root so that the absolute path also resolves in its own tests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const CRATE_PREFIX: &str = "jx_";

/// Facade crates and the `jx_*` crates they re-export as `::facade::short_name`.
const FACADES: &[(&str, &[&str])] = &[
    ("jx_core", &["jx_utils", "jx_reflect", "jx_json"]),
    ("jx_json", &["jx_reflect"]),
];

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        FACADES
            .iter()
            .find(|(facade, members)| members.contains(&name) && deps.contains_key(facade))
            .map(|(facade, _)| {
                let mut path = Self::parse_str::<syn::Path>(&format!("::{facade}"));
                path.segments.push(Self::parse_str(module));
                path
            })
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and refreshed when the file's
    /// modification time changes. Call this once per macro invocation and
    /// keep the returned [`syn::Path`].
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use toml_edit::{Document, Item};

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    fn resolve(manifest: &str, name: &str) -> String {
        let document = Document::parse(manifest.to_owned().into_boxed_str()).unwrap();
        let Some(Item::Table(deps)) = document.get("dependencies") else {
            panic!("missing [dependencies]");
        };
        path_string(&Manifest::find_in_deps(deps, name).unwrap())
    }

    #[test]
    fn direct_dependency_wins() {
        let toml = "[dependencies]\njx_reflect = \"0.0.1\"\njx_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "jx_reflect"), "::jx_reflect");
    }

    #[test]
    fn facade_dependency() {
        let toml = "[dependencies]\njx_json = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "jx_reflect"), "::jx_json::reflect");

        let toml = "[dependencies]\njx_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "jx_reflect"), "::jx_core::reflect");
    }
}
