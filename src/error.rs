//! Error type shared by the helpers and the chapters.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while setting up or drawing a chapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The window or its OpenGL configuration could not be created.
    #[error("failed to create the window: {0}")]
    Window(String),

    /// Context or surface creation failed inside glutin.
    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::error::Error),

    /// The context does not expose a usable OpenGL version.
    #[error("incompatible OpenGL: {0}")]
    IncompatibleOpenGl(#[from] glium::IncompatibleOpenGl),

    /// A shader failed to compile or link. The driver log is part of the message.
    #[error("shader program error: {0}")]
    Program(#[from] glium::ProgramCreationError),

    /// Texture storage could not be allocated.
    #[error("texture creation error: {0}")]
    Texture(#[from] glium::texture::TextureCreationError),

    /// Vertex buffer creation failed.
    #[error("vertex buffer error: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),

    /// Index buffer creation failed.
    #[error("index buffer error: {0}")]
    IndexBuffer(#[from] glium::index::BufferCreationError),

    /// A draw call was rejected.
    #[error("draw error: {0}")]
    Draw(#[from] glium::DrawError),

    /// An offscreen framebuffer is not complete.
    #[error("framebuffer error: {0}")]
    Framebuffer(#[from] glium::framebuffer::ValidationError),

    /// Presenting the frame failed.
    #[error("failed to swap buffers: {0}")]
    SwapBuffers(#[from] glium::SwapBuffersError),

    /// An image file could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A Wavefront OBJ file could not be parsed.
    #[error("OBJ error: {0}")]
    Obj(#[from] obj::ObjError),

    /// A file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A mesh has nothing to draw.
    #[error("mesh `{0}` has no triangles")]
    EmptyMesh(String),

    /// A face refers to a position, texture coordinate or normal that does not exist.
    #[error("mesh `{mesh}` references missing {attribute} {index}")]
    MeshIndex {
        /// Mesh being built.
        mesh: String,
        /// `position`, `texture coordinate` or `normal`.
        attribute: &'static str,
        /// Zero-based index found in the face.
        index: usize,
    },
}

impl Error {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io { path: path.into(), source }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io("shaders/missing.vert", io::Error::new(io::ErrorKind::NotFound, "not found"));
        let message = err.to_string();
        assert!(message.contains("shaders/missing.vert"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn empty_mesh_names_the_mesh() {
        assert_eq!(Error::EmptyMesh("alliance.obj".into()).to_string(), "mesh `alliance.obj` has no triangles");
    }
}
