use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Displayable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

/// What `cat-file` prints about an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Content in its canonical textual form
    Pretty,
    Type,
    /// Size declared in the object header
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;

        match mode {
            CatFileMode::Pretty => {
                let object = self
                    .database()
                    .read_object(&oid)
                    .context(format!("Unable to read object {oid}"))?;

                self.writer().write_all(&object.display())?;
            }
            CatFileMode::Type => {
                let object_type = self
                    .database()
                    .read_object_type(&oid)
                    .context(format!("Unable to read object {oid}"))?;

                writeln!(self.writer(), "{object_type}")?;
            }
            CatFileMode::Size => {
                let header = self
                    .database()
                    .read_header(&oid)
                    .context(format!("Unable to read object {oid}"))?;
                let size = header
                    .declared_size
                    .context(format!("Object {oid} has no valid size in its header"))?;

                writeln!(self.writer(), "{size}")?;
            }
        }

        Ok(())
    }
}
