//! Uniform values, per-frame uniform sets and the uniform binder.
//!
//! A demo produces a fresh [`UniformSet`] every frame. The binder turns each
//! entry into exactly one correctly shaped upload call, or none at all when
//! the program has no uniform by that name.

use std::collections::HashMap;

use crate::config::MAX_UNIFORMS;
use crate::gl::GlContext;

/// A value a uniform can be set to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `vec2`
    Vec2([f32; 2]),
    /// `vec3`
    Vec3([f32; 3]),
    /// `vec4`
    Vec4([f32; 4]),
    /// `int` / `sampler2D`
    Int(i32),
}

impl UniformValue {
    /// Build a float value from 1 to 4 components. Any other length is `None`.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match *values {
            [x] => Some(Self::Float(x)),
            [x, y] => Some(Self::Vec2([x, y])),
            [x, y, z] => Some(Self::Vec3([x, y, z])),
            [x, y, z, w] => Some(Self::Vec4([x, y, z, w])),
            _ => None,
        }
    }

    /// Number of components.
    pub fn components(&self) -> usize {
        match self {
            Self::Float(_) | Self::Int(_) => 1,
            Self::Vec2(_) => 2,
            Self::Vec3(_) => 3,
            Self::Vec4(_) => 4,
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(v: [f32; 2]) -> Self {
        Self::Vec2(v)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(v: [f32; 3]) -> Self {
        Self::Vec3(v)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(v: [f32; 4]) -> Self {
        Self::Vec4(v)
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

/// Flags are passed as `1.0` / `0.0` floats, the way the shaders test them.
impl From<bool> for UniformValue {
    fn from(v: bool) -> Self {
        Self::Float(if v { 1.0 } else { 0.0 })
    }
}

/// Named uniform values for one frame.
///
/// The set is cleared and refilled every frame, so an overflow is reported
/// once for the lifetime of the set rather than once per frame.
#[derive(Clone, Debug, Default)]
pub struct UniformSet {
    entries: heapless::Vec<(&'static str, UniformValue), MAX_UNIFORMS>,
    overflow_reported: bool,
}

impl PartialEq for UniformSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl UniformSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing any earlier value for it.
    pub fn set(&mut self, name: &'static str, value: impl Into<UniformValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else if self.entries.push((name, value)).is_err() && !self.overflow_reported {
            self.overflow_reported = true;
            log::warn!("Uniform set full ({MAX_UNIFORMS}); dropping `{name}`");
        }
    }

    /// Value currently set for `name`.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, UniformValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry, keeping the storage.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Outcome of binding one uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The value was uploaded.
    Uploaded,
    /// The program has no uniform by that name; nothing was uploaded.
    Missing,
}

/// Issue the upload call matching the value's shape.
pub fn upload<G: GlContext>(gl: &G, location: &G::UniformLocation, value: UniformValue) {
    match value {
        UniformValue::Float(v) => gl.uniform1f(location, v),
        UniformValue::Vec2(v) => gl.uniform2fv(location, &v),
        UniformValue::Vec3(v) => gl.uniform3fv(location, &v),
        UniformValue::Vec4(v) => gl.uniform4fv(location, &v),
        UniformValue::Int(v) => gl.uniform1i(location, v),
    }
}

/// Look up `name` in `program` and upload `value`.
///
/// An unknown name is a silent no-op reported as [`Binding::Missing`].
pub fn set_uniform<G: GlContext>(
    gl: &G,
    program: &G::Program,
    name: &str,
    value: impl Into<UniformValue>,
) -> Binding {
    match gl.uniform_location(program, name) {
        Some(location) => {
            upload(gl, &location, value.into());
            Binding::Uploaded
        }
        None => Binding::Missing,
    }
}

/// Per-program binder that caches locations and warns once per missing name.
pub struct UniformBinder<G: GlContext> {
    locations: HashMap<&'static str, Option<G::UniformLocation>>,
}

impl<G: GlContext> Default for UniformBinder<G> {
    fn default() -> Self {
        Self {
            locations: HashMap::new(),
        }
    }
}

impl<G: GlContext> UniformBinder<G> {
    /// Create a binder with an empty location cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload `value` to `name` in `program`.
    ///
    /// The first lookup of a name that does not exist logs a warning; later
    /// frames skip it quietly.
    pub fn bind(
        &mut self,
        gl: &G,
        program: &G::Program,
        name: &'static str,
        value: UniformValue,
    ) -> Binding {
        let location = self.locations.entry(name).or_insert_with(|| {
            let location = gl.uniform_location(program, name);
            if location.is_none() {
                log::warn!("Uniform `{name}` not found in program (misspelled or optimized out)");
            }
            location
        });

        match location {
            Some(location) => {
                upload(gl, location, value);
                Binding::Uploaded
            }
            None => Binding::Missing,
        }
    }

    /// Upload every entry of `uniforms`; returns how many were uploaded.
    pub fn bind_all(&mut self, gl: &G, program: &G::Program, uniforms: &UniformSet) -> usize {
        uniforms
            .iter()
            .filter(|&(name, value)| self.bind(gl, program, name, value) == Binding::Uploaded)
            .count()
    }

    /// Names looked up so far that the program does not declare.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.locations
            .iter()
            .filter(|(_, location)| location.is_none())
            .map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_shapes() {
        assert_eq!(UniformValue::from_slice(&[1.0]), Some(UniformValue::Float(1.0)));
        assert_eq!(
            UniformValue::from_slice(&[1.0, 2.0, 3.0]),
            Some(UniformValue::Vec3([1.0, 2.0, 3.0]))
        );
        assert_eq!(UniformValue::from_slice(&[]), None);
        assert_eq!(UniformValue::from_slice(&[0.0; 5]), None);
    }

    #[test]
    fn test_bool_becomes_float_flag() {
        assert_eq!(UniformValue::from(true), UniformValue::Float(1.0));
        assert_eq!(UniformValue::from(false), UniformValue::Float(0.0));
    }

    #[test]
    fn test_set_replaces_existing_name() {
        let mut set = UniformSet::new();
        set.set("u_time", 1.0_f32);
        set.set("u_scale", 2.0_f32);
        set.set("u_time", 3.0_f32);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("u_time"), Some(UniformValue::Float(3.0)));
        assert_eq!(set.iter().next().map(|(n, _)| n), Some("u_time"));
    }

    #[test]
    fn test_overflow_is_dropped() {
        const NAMES: [&str; MAX_UNIFORMS + 1] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
        ];
        let mut set = UniformSet::new();
        for name in NAMES {
            set.set(name, 0.0_f32);
        }
        assert_eq!(set.len(), MAX_UNIFORMS);
        assert_eq!(set.get("m"), None);
    }
}
