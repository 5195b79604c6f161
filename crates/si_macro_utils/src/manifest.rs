use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The parsed Cargo.toml of the crate currently being compiled.
///
/// Derive macros use it to emit a [`syn::Path`] to another workspace crate
/// that is valid from the caller's point of view.
///
/// ```rust
/// # use si_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("si_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct dependency named `name` resolves to `::name`.
/// 2. A name starting with `si_`, when the crate depends on the `structinfo`
///    facade, resolves to `::structinfo::<rest>` (e.g. `si_reflect` becomes
///    `::structinfo::reflect`).
/// 3. Steps 1 and 2 are repeated for `dev-dependencies`.
/// 4. Anything else falls back to `::name`.
///
/// A crate that needs to name itself from derive output should add
/// `extern crate self as <name>;` at its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "structinfo";
const CRATE_PREFIX: &str = "si_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("CARGO_MANIFEST_DIR is not set; derive macros must run under cargo");
        };
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(path.exists(), "no Cargo.toml at {}", path.display());
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text.into_boxed_str(),
            Err(err) => panic!("cannot read {}: {err}", path.display()),
        };
        match Document::parse(text) {
            Ok(doc) => doc,
            Err(err) => panic!("cannot parse {}: {err}", path.display()),
        }
    }

    fn path_of(segments: &[&str]) -> syn::Path {
        let text = segments.iter().fold(String::new(), |mut acc, seg| {
            acc.push_str("::");
            acc.push_str(seg);
            acc
        });
        match syn::parse_str(&text) {
            Ok(path) => path,
            Err(err) => panic!("`{text}` is not a valid path: {err}"),
        }
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::path_of(&[FACADE_NAME, short]))
    }

    /// Returns the path under which the caller can reach the crate `name`.
    ///
    /// See the type level docs for the lookup order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|key| match self.manifest.get(key) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::path_of(&[name]))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's modification
    /// time changes. Reading is still not free, so call this once per macro
    /// invocation and keep the returned path.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = match Self::modified_time(&path) {
            Ok(time) => time,
            Err(err) => panic!("cannot stat {}: {err}", path.display()),
        };

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read_manifest(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::<str>::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn render(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\nsi_reflect = \"0.1\"\nstructinfo = \"0.1\"\n");
        let path = m.get_crate_path("si_reflect");
        assert!(path.leading_colon.is_some());
        assert_eq!(render(&path), "si_reflect");
    }

    #[test]
    fn facade_dependency_is_used() {
        let m = manifest("[dependencies]\nstructinfo = \"0.1\"\n");
        assert_eq!(render(&m.get_crate_path("si_reflect")), "structinfo::reflect");
    }

    #[test]
    fn dev_dependencies_are_searched() {
        let m = manifest("[dev-dependencies]\nstructinfo = { path = \"..\" }\n");
        assert_eq!(render(&m.get_crate_path("si_utils")), "structinfo::utils");
    }

    #[test]
    fn unknown_crate_falls_back() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(render(&m.get_crate_path("si_reflect")), "si_reflect");
    }
}
