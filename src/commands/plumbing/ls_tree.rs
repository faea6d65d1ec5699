use crate::areas::repository::Repository;
use crate::artifacts::core::quote::quote_path;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// List a tree, or the tree of a commit
    pub fn ls_tree(&mut self, object_id: &str, recursive: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;

        let tree = match self
            .database()
            .read_object(&oid)
            .context(format!("Unable to read object {oid}"))?
        {
            Object::Tree(tree) => tree,
            Object::Commit(commit) => self.read_subtree(&commit.tree_oid()?)?,
            Object::Blob(_) => anyhow::bail!("Object {oid} is not a tree"),
        };

        self.list_tree(tree, None, recursive)
    }

    fn read_subtree(&self, oid: &ObjectId) -> anyhow::Result<Tree> {
        self.database()
            .read_tree(oid)?
            .context(format!("Object {oid} is not a tree"))
    }

    fn list_tree(&self, tree: Tree, prefix: Option<&str>, recursive: bool) -> anyhow::Result<()> {
        for entry in tree.into_entries() {
            let path = match prefix {
                Some(prefix) => format!("{prefix}/{}", entry.name),
                None => entry.name.clone(),
            };

            if recursive && entry.is_tree() {
                let subtree = self.read_subtree(&entry.oid)?;
                self.list_tree(subtree, Some(&path), recursive)?;
            } else {
                writeln!(
                    self.writer(),
                    "{:0>6} {} {}\t{}",
                    entry.mode,
                    entry.object_type(),
                    entry.oid,
                    quote_path(&path)
                )?;
            }
        }

        Ok(())
    }
}
