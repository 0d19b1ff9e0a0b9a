/// What the runtime should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; redraw on the next request.
    Reconfigured,
    /// Transient error; drop this paint.
    SkipFrame,
    /// Out of memory; shut down.
    Fatal,
}
