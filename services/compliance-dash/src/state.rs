// services/compliance-dash/src/state.rs
//
// Dashboard view state. The data never changes; only the scroll position
// of the main column does.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub scroll_offset: u16,
    pub content_height: u16,
    pub viewport_height: u16,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the canvas and viewport sizes from the last draw and pull the
    /// offset back into range if the terminal grew.
    pub fn set_dimensions(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(lines)
            .min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn home(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn end(&mut self) {
        self.scroll_offset = self.max_offset();
    }

    /// How far down the page the viewport is; 100 when everything fits
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        ((self.scroll_offset as u32 * 100) / max as u32) as u16
    }
}
