//! Call-stack capture and the notebook detection heuristic
//!
//! "Imported directly in a notebook" is approximated by one check: the
//! frame at a fixed index from the outermost end of the stack must
//! have a source path ending in the kernel launcher filename. This is
//! a deliberate, documented heuristic. It cannot distinguish a
//! notebook from any other runtime that uses the same launcher file,
//! and an import routed through a wrapper module shifts the effective
//! depth. Callers own the depth parameter; behavior under other
//! interactive front-ends is unsupported.

use std::fmt;
use std::path::{Path, PathBuf};

/// Sentinel filename marking the interactive kernel launcher frame
pub const KERNEL_LAUNCHER_FILE: &str = "ipykernel_launcher.py";

/// A single stack frame
///
/// Only the source file path matters for detection. Frames resolved
/// without debug info carry no path and never match the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    file: Option<PathBuf>,
}

impl StackFrame {
    /// Create a frame with a known source file path
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
        }
    }

    /// Create a frame whose source file could not be resolved
    pub fn unresolved() -> Self {
        Self { file: None }
    }

    /// Source file path, if resolved
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Whether this frame's path ends with the kernel launcher filename
    ///
    /// Suffix match on the whole path string, so both a bare filename
    /// and a full site-packages path qualify.
    pub fn is_kernel_launcher(&self) -> bool {
        match &self.file {
            Some(path) => path.to_string_lossy().ends_with(KERNEL_LAUNCHER_FILE),
            None => false,
        }
    }
}

/// Result of the qualifying-context check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackVerdict {
    /// The designated frame is the kernel launcher
    NotebookImport,
    /// Fewer frames than the designated index requires
    TooShallow,
    /// The designated frame is not the kernel launcher
    NotNotebook,
}

impl fmt::Display for StackVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StackVerdict::NotebookImport => "notebook import",
            StackVerdict::TooShallow => "stack too shallow",
            StackVerdict::NotNotebook => "not a notebook context",
        };
        write!(f, "{}", s)
    }
}

/// An ordered call stack, outermost frame first
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    /// Capture the current call stack
    ///
    /// Symbols are resolved eagerly; each inlined frame resolves to
    /// its own entry. Frames are stored outermost first so indexing
    /// means "depth from the program entry point".
    pub fn capture() -> Self {
        let mut frames = Vec::new();
        backtrace::trace(|frame| {
            let mut resolved = false;
            backtrace::resolve_frame(frame, |symbol| {
                resolved = true;
                frames.push(StackFrame {
                    file: symbol.filename().map(Path::to_path_buf),
                });
            });
            if !resolved {
                frames.push(StackFrame::unresolved());
            }
            true
        });
        frames.reverse();
        Self { frames }
    }

    /// Build a stack from source file paths, outermost first
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            frames: files.into_iter().map(StackFrame::new).collect(),
        }
    }

    /// Build a stack from explicit frames, outermost first
    pub fn from_frames(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the stack has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at the given index from the outermost end
    pub fn frame(&self, index: usize) -> Option<&StackFrame> {
        self.frames.get(index)
    }

    /// Apply the notebook heuristic at the given frame index
    ///
    /// A stack with fewer than `depth + 1` frames is too shallow to
    /// inspect; otherwise the frame at `depth` decides.
    pub fn classify(&self, depth: usize) -> StackVerdict {
        if self.frames.len() < depth + 1 {
            return StackVerdict::TooShallow;
        }
        if self.frames[depth].is_kernel_launcher() {
            StackVerdict::NotebookImport
        } else {
            StackVerdict::NotNotebook
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_suffix_match_full_path() {
        let frame =
            StackFrame::new("/usr/lib/python3.11/site-packages/ipykernel_launcher.py");
        assert!(frame.is_kernel_launcher());
    }

    #[test]
    fn test_frame_suffix_match_bare_filename() {
        let frame = StackFrame::new(KERNEL_LAUNCHER_FILE);
        assert!(frame.is_kernel_launcher());
    }

    #[test]
    fn test_frame_other_file_does_not_match() {
        let frame = StackFrame::new("/home/user/notebook_helpers.py");
        assert!(!frame.is_kernel_launcher());
    }

    #[test]
    fn test_unresolved_frame_never_matches() {
        assert!(!StackFrame::unresolved().is_kernel_launcher());
    }

    #[test]
    fn test_classify_too_shallow() {
        let stack = CallStack::from_files(["/usr/bin/runner.py", "/home/u/main.py"]);
        assert_eq!(stack.classify(2), StackVerdict::TooShallow);
    }

    #[test]
    fn test_classify_notebook_import() {
        let stack = CallStack::from_files([
            "/usr/lib/python3.11/runpy.py",
            "/usr/lib/python3.11/runpy.py",
            "/opt/venv/lib/python3.11/site-packages/ipykernel_launcher.py",
            "/tmp/ipykernel_99/kernel_session.py",
        ]);
        assert_eq!(stack.classify(2), StackVerdict::NotebookImport);
    }

    #[test]
    fn test_classify_not_notebook() {
        let stack = CallStack::from_files([
            "/usr/bin/app.py",
            "/home/u/main.py",
            "/home/u/helpers.py",
        ]);
        assert_eq!(stack.classify(2), StackVerdict::NotNotebook);
    }

    #[test]
    fn test_classify_depth_zero() {
        let stack = CallStack::from_files(["ipykernel_launcher.py"]);
        assert_eq!(stack.classify(0), StackVerdict::NotebookImport);
    }

    #[test]
    fn test_classify_exact_boundary() {
        // depth + 1 frames is exactly enough to inspect frame[depth]
        let stack = CallStack::from_files(["a.py", "b.py", "ipykernel_launcher.py"]);
        assert_eq!(stack.classify(2), StackVerdict::NotebookImport);
        assert_eq!(stack.classify(3), StackVerdict::TooShallow);
    }

    #[test]
    fn test_capture_yields_frames() {
        let stack = CallStack::capture();
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_from_frames_preserves_order() {
        let stack = CallStack::from_frames(vec![
            StackFrame::new("outer.py"),
            StackFrame::unresolved(),
            StackFrame::new("inner.py"),
        ]);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.frame(0).unwrap().file(), Some(Path::new("outer.py")));
        assert!(stack.frame(1).unwrap().file().is_none());
    }
}
