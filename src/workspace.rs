//! Layout of the local workspace holding both working copies.

use std::path::{Path, PathBuf};

use strum::{AsRefStr, Display};

/// One of the two working copies in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tree {
    Trunk,
    Stable,
}

impl Tree {
    pub const BOTH: [Tree; 2] = [Tree::Trunk, Tree::Stable];
}

/// Paths inside `<workdir>/{trunk,stable}`.
///
/// ```text
/// <workdir>/<tree>/templates/messages/<module>/<package>.pot
/// <workdir>/<tree>/<lang>/messages/<module>/<package>.po
/// ```
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    module: String,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, module: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            module: module.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the workspace directory. Fails if it already exists.
    pub fn create(&self) -> std::io::Result<()> {
        std::fs::create_dir(&self.root)
    }

    /// Root of a working copy.
    pub fn tree(&self, tree: Tree) -> PathBuf {
        self.root.join(tree.as_ref())
    }

    /// The directory chain `<top>`, `<top>/messages`, `<top>/messages/<module>`,
    /// in the order a sparse checkout must update it.
    pub fn messages_chain(&self, tree: Tree, top: &str) -> [PathBuf; 3] {
        let top = self.tree(tree).join(top);
        let messages = top.join("messages");
        let module = messages.join(&self.module);
        [top, messages, module]
    }

    /// `<tree>/templates/messages/<module>`
    pub fn template_dir(&self, tree: Tree) -> PathBuf {
        self.module_dir(tree, "templates")
    }

    /// `<tree>/<lang>/messages/<module>`
    pub fn language_dir(&self, tree: Tree, lang: &str) -> PathBuf {
        self.module_dir(tree, lang)
    }

    fn module_dir(&self, tree: Tree, top: &str) -> PathBuf {
        self.tree(tree)
            .join(top)
            .join("messages")
            .join(&self.module)
    }
}
