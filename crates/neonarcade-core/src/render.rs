/// Render contract: paint one frame from a state snapshot.
///
/// The state is borrowed immutably; a renderer owns its surface and nothing
/// else.
pub trait Renderer<S> {
    fn draw(&mut self, state: &S);
}
