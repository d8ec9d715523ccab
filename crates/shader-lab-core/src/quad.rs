//! Full-screen quad geometry.

use crate::config::{POSITION_ATTRIBUTE, QUAD_COMPONENTS, QUAD_VERTICES};
use crate::gl::GlContext;

/// Upload the quad and bind it to the program's `a_position` input.
///
/// Runs once per program at setup. Leaves the buffer bound and the attribute
/// enabled, ready for a 4-vertex triangle strip.
pub fn setup_fullscreen_quad<G: GlContext>(gl: &G, program: &G::Program) -> Option<G::Buffer> {
    let Some(buffer) = gl.create_buffer() else {
        log::error!("Failed to create quad buffer");
        return None;
    };
    gl.upload_array_buffer(&buffer, &QUAD_VERTICES);

    match gl.attrib_location(program, POSITION_ATTRIBUTE) {
        Some(location) => gl.enable_vertex_attrib(location, QUAD_COMPONENTS),
        None => log::warn!("Program has no `{POSITION_ATTRIBUTE}` input; quad will not be drawn"),
    }

    Some(buffer)
}
