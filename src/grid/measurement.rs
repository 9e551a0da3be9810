//! Host measurement and scroll-container seams.
//!
//! The grid never measures anything itself. A host reports its width and
//! viewport height through [`ViewportMeasure`] and owns the scroll position
//! through [`ScrollContainer`]. On regular screens the container is external
//! (the page scrolls and the grid follows it); on small screens the grid owns
//! the offset and nothing is written back.

use super::poster_grid::{GridEvent, UpdateOutcome};

/// Something that can report the grid's on-screen size.
pub trait ViewportMeasure {
    /// Width available to the grid; `None` before first layout.
    fn measure_width(&self) -> Option<u32>;

    /// Height of the scroll container's viewport; `None` when unknown.
    fn viewport_height(&self) -> Option<u32>;
}

/// A scroll container that owns a vertical offset.
pub trait ScrollContainer {
    /// Current offset in pixels.
    fn scroll_offset(&self) -> u64;

    /// Move to `offset`.
    fn scroll_to(&mut self, offset: u64);
}

/// Who owns the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBinding {
    /// An outer container scrolls; the grid mirrors and commands it.
    #[default]
    External,
    /// The grid's own viewport scrolls.
    Internal,
}

impl ScrollBinding {
    /// Binding for a screen class.
    pub fn for_screen(is_small_screen: bool) -> Self {
        if is_small_screen {
            ScrollBinding::Internal
        } else {
            ScrollBinding::External
        }
    }
}

/// Request for the external container to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollCommand {
    /// Target offset in pixels.
    pub offset: u64,
}

impl ScrollCommand {
    /// Create a command.
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }
}

/// Events describing the host's current size.
///
/// Width is always reported (an unknown width suppresses rendering); the
/// viewport height only when the host knows it.
pub fn resize_events<M: ViewportMeasure + ?Sized>(host: &M) -> Vec<GridEvent> {
    let mut events = vec![GridEvent::Measured(host.measure_width())];
    if let Some(height) = host.viewport_height() {
        events.push(GridEvent::ViewportHeight(height));
    }
    events
}

/// Turns host measurements into grid events, dropping repeats.
///
/// A resize callback may fire many times with the same size; only changes
/// produce events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementAdapter {
    last_width: Option<Option<u32>>,
    last_height: Option<u32>,
    last_offset: Option<u64>,
}

impl MeasurementAdapter {
    /// Adapter that has seen nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for whatever changed since the last call.
    pub fn on_resize<M: ViewportMeasure + ?Sized>(&mut self, host: &M) -> Vec<GridEvent> {
        resize_events(host)
            .into_iter()
            .filter(|event| match *event {
                GridEvent::Measured(width) => self.last_width.replace(width) != Some(width),
                GridEvent::ViewportHeight(height) => {
                    self.last_height.replace(height) != Some(height)
                }
                _ => true,
            })
            .collect()
    }

    /// Scroll event when the bound container moved since the last call.
    pub fn on_scroll<C: ScrollContainer + ?Sized>(
        &mut self,
        binding: ScrollBinding,
        container: &C,
    ) -> Option<GridEvent> {
        let event = scroll_event(binding, container)?;
        let offset = container.scroll_offset();
        if self.last_offset == Some(offset) {
            return None;
        }
        self.last_offset = Some(offset);
        Some(event)
    }

    /// Forward an update's scroll command, remembering the new offset so it
    /// does not echo back as a scroll event.
    pub fn apply<C: ScrollContainer + ?Sized>(
        &mut self,
        outcome: &UpdateOutcome,
        container: &mut C,
    ) -> bool {
        let moved = apply_scroll_command(outcome, container);
        if moved {
            self.last_offset = Some(container.scroll_offset());
        }
        moved
    }
}

/// Event mirroring the container's offset, when the container is bound.
pub fn scroll_event<C: ScrollContainer + ?Sized>(
    binding: ScrollBinding,
    container: &C,
) -> Option<GridEvent> {
    match binding {
        ScrollBinding::External => Some(GridEvent::Scrolled(container.scroll_offset())),
        ScrollBinding::Internal => None,
    }
}

/// Forward an update's scroll command to the container.
///
/// Returns whether the container was moved.
pub fn apply_scroll_command<C: ScrollContainer + ?Sized>(
    outcome: &UpdateOutcome,
    container: &mut C,
) -> bool {
    match outcome.scroll_command {
        Some(command) if command.offset != container.scroll_offset() => {
            container.scroll_to(command.offset);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host {
        width: Option<u32>,
        height: Option<u32>,
        offset: u64,
        moves: usize,
    }

    impl Host {
        fn new(width: Option<u32>, height: Option<u32>) -> Self {
            Self {
                width,
                height,
                offset: 0,
                moves: 0,
            }
        }
    }

    impl ViewportMeasure for Host {
        fn measure_width(&self) -> Option<u32> {
            self.width
        }

        fn viewport_height(&self) -> Option<u32> {
            self.height
        }
    }

    impl ScrollContainer for Host {
        fn scroll_offset(&self) -> u64 {
            self.offset
        }

        fn scroll_to(&mut self, offset: u64) {
            self.offset = offset;
            self.moves += 1;
        }
    }

    #[test]
    fn small_screen_binds_internally() {
        assert_eq!(ScrollBinding::for_screen(true), ScrollBinding::Internal);
        assert_eq!(ScrollBinding::for_screen(false), ScrollBinding::External);
    }

    #[test]
    fn resize_reports_width_and_height() {
        let host = Host::new(Some(700), Some(900));
        assert_eq!(
            resize_events(&host),
            vec![GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(900)]
        );
    }

    #[test]
    fn resize_reports_unknown_width() {
        let host = Host::new(None, None);
        assert_eq!(resize_events(&host), vec![GridEvent::Measured(None)]);
    }

    #[test]
    fn internal_binding_ignores_container() {
        let mut host = Host::new(Some(700), Some(900));
        host.offset = 120;
        assert_eq!(scroll_event(ScrollBinding::Internal, &host), None);
        assert_eq!(
            scroll_event(ScrollBinding::External, &host),
            Some(GridEvent::Scrolled(120))
        );
    }

    #[test]
    fn command_moves_container_once() {
        let mut host = Host::new(Some(700), Some(900));
        let outcome = UpdateOutcome {
            scroll_command: Some(ScrollCommand::new(400)),
            ..UpdateOutcome::default()
        };

        assert!(apply_scroll_command(&outcome, &mut host));
        assert_eq!(host.offset, 400);
        // already there
        assert!(!apply_scroll_command(&outcome, &mut host));
        assert_eq!(host.moves, 1);
    }

    #[test]
    fn adapter_drops_repeated_measurements() {
        let mut adapter = MeasurementAdapter::new();
        let mut host = Host::new(Some(700), Some(900));

        assert_eq!(adapter.on_resize(&host).len(), 2);
        assert!(adapter.on_resize(&host).is_empty());

        host.width = Some(546);
        assert_eq!(adapter.on_resize(&host), vec![GridEvent::Measured(Some(546))]);
    }

    #[test]
    fn adapter_reports_width_loss() {
        let mut adapter = MeasurementAdapter::new();
        let mut host = Host::new(Some(700), Some(900));
        adapter.on_resize(&host);

        host.width = None;
        assert_eq!(adapter.on_resize(&host), vec![GridEvent::Measured(None)]);
    }

    #[test]
    fn adapter_does_not_echo_its_own_scroll() {
        let mut adapter = MeasurementAdapter::new();
        let mut host = Host::new(Some(700), Some(900));
        let outcome = UpdateOutcome {
            scroll_command: Some(ScrollCommand::new(400)),
            ..UpdateOutcome::default()
        };

        assert!(adapter.apply(&outcome, &mut host));
        assert_eq!(adapter.on_scroll(ScrollBinding::External, &host), None);

        host.offset = 450;
        assert_eq!(
            adapter.on_scroll(ScrollBinding::External, &host),
            Some(GridEvent::Scrolled(450))
        );
    }

    #[test]
    fn no_command_leaves_container_alone() {
        let mut host = Host::new(Some(700), Some(900));
        assert!(!apply_scroll_command(&UpdateOutcome::default(), &mut host));
        assert_eq!(host.moves, 0);
    }
}
