//! File Materializer - renders and writes blueprint files.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FileSpec, RenderContext, ScaffoldProgress},
};

/// Renders each file template and writes it below the project root.
///
/// Writes happen in catalog order and stop at the first failure. Files
/// already written stay on disk; each successful write is appended to
/// `ScaffoldProgress::files_written`.
pub struct FileMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(root = %root.display(), count = files.len()))]
    pub fn materialize(
        &self,
        root: &Path,
        files: &[FileSpec],
        ctx: &RenderContext,
        progress: &mut ScaffoldProgress,
    ) -> Result<(), ApplicationError> {
        for spec in files {
            let path = root.join(spec.path.as_path());

            let content =
                ctx.render(&spec.template)
                    .map_err(|e| ApplicationError::FileRenderFailed {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?;

            self.filesystem
                .write_file(&path, &content)
                .map_err(|e| ApplicationError::FileWriteFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

            debug!(path = %path.display(), bytes = content.len(), "File written");
            progress.files_written.push(path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{ProjectContext, ProjectName, RelativePath};

    fn files() -> Vec<FileSpec> {
        [
            ("app/cmd/main.go", "package main // {{PROJECT_NAME}}"),
            (".env", "ENV=development"),
            ("Makefile", "all: build"),
            ("Dockerfile", "FROM scratch"),
        ]
        .into_iter()
        .map(|(p, t)| FileSpec {
            path: RelativePath::new(p),
            template: t.to_string(),
        })
        .collect()
    }

    fn ctx() -> RenderContext {
        let project = ProjectContext::new(ProjectName::parse("demo").unwrap(), "/w");
        RenderContext::new(&project)
    }

    #[test]
    fn writes_rendered_content_in_catalog_order() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&writes);

        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(move |p, c| {
            log.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });

        let mut progress = ScaffoldProgress::new("/w/demo", 4, 2);
        FileMaterializer::new(&fs)
            .materialize(Path::new("/w/demo"), &files(), &ctx(), &mut progress)
            .unwrap();

        let writes = writes.lock().unwrap();
        let paths: Vec<_> = writes.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/w/demo/app/cmd/main.go"),
                PathBuf::from("/w/demo/.env"),
                PathBuf::from("/w/demo/Makefile"),
                PathBuf::from("/w/demo/Dockerfile"),
            ]
        );
        assert_eq!(writes[0].1, "package main // demo");
        assert_eq!(progress.files_written, paths);
    }

    #[test]
    fn stops_at_first_failed_write() {
        let attempts = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&attempts);

        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(move |p, _| {
            *counter.lock().unwrap() += 1;
            if p.ends_with("Makefile") {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"))
            } else {
                Ok(())
            }
        });

        let mut progress = ScaffoldProgress::new("/w/demo", 4, 2);
        let err = FileMaterializer::new(&fs)
            .materialize(Path::new("/w/demo"), &files(), &ctx(), &mut progress)
            .unwrap_err();

        assert_eq!(
            err,
            ApplicationError::FileWriteFailed {
                path: PathBuf::from("/w/demo/Makefile"),
                reason: "permission denied".into(),
            }
        );
        assert_eq!(*attempts.lock().unwrap(), 3, "Dockerfile must never be attempted");
        assert_eq!(progress.files_written.len(), 2);
    }

    #[test]
    fn render_failure_prevents_the_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let bad = vec![FileSpec {
            path: RelativePath::new(".air.toml"),
            template: "cmd = ./{{APP_DIR}}/cmd".into(),
        }];
        let mut progress = ScaffoldProgress::new("/w/demo", 1, 0);
        let err = FileMaterializer::new(&fs)
            .materialize(Path::new("/w/demo"), &bad, &ctx(), &mut progress)
            .unwrap_err();

        assert!(matches!(err, ApplicationError::FileRenderFailed { .. }));
        assert!(progress.files_written.is_empty());
    }
}
