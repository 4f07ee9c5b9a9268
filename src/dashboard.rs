//! Main Menu Dashboard
//!
//! The interactive title screen: a background image, a title label, and
//! three menu entries (PLAY, HIGH SCORE, QUIT) navigable by mouse click or
//! keyboard. The dashboard owns its font, cached background texture, and
//! selection state; the canvas stays with the caller and is lent to the
//! draw/run methods.
//!
//! # Event handling
//!
//! - Window close: quit
//! - Left click: select and execute the option under the cursor, if any
//! - Up/Down: move the selection with wraparound
//! - Return: execute the current selection
//!
//! All other events are ignored.
//!
//! # Example Usage
//!
//! ```rust
//! let mut dashboard = Dashboard::new(&ttf_context, &texture_creator, SCREEN_WIDTH)?;
//! dashboard.run(&mut canvas, &mut event_pump)?;
//! ```

use crate::clock::FrameClock;
use crate::menu_option::MenuOption;
use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator, TextureQuery};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

const FONT_PATH: &str = "assets/Font/monogram.ttf";
const FONT_SIZE: u16 = 36;
const BACKGROUND_PATH: &str = "assets/Graphics/background.png";

/// Vertical center of the first menu entry, in screen pixels
const MENU_TOP: i32 = 200;
/// Vertical distance between menu entry centers
const MENU_SPACING: i32 = 80;
/// Vertical center of the title label
const TITLE_Y: i32 = 100;

const TITLE_COLOR: Color = Color::RGB(182, 143, 64);
const SELECTED_COLOR: Color = Color::RGB(255, 0, 0);
const UNSELECTED_COLOR: Color = Color::RGB(255, 255, 255);

const TARGET_FPS: u32 = 30;

/// What the menu loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFlow {
    Continue,
    Quit,
}

/// The main menu controller
///
/// Created once at startup and driven by [`Dashboard::run`]. Both exit
/// paths (window close and selecting QUIT) leave through the same loop
/// break, so SDL teardown happens exactly once, on drop, when `main`
/// returns.
pub struct Dashboard<'a> {
    font: Font<'a, 'static>,
    texture_creator: &'a TextureCreator<WindowContext>,
    background: Texture<'a>,
    menu_options: [MenuOption; 3],
    selected_option: Option<MenuOption>,
    screen_width: u32,
    clock: FrameClock,
}

impl<'a> Dashboard<'a> {
    /// Creates the dashboard, loading the font and background image
    ///
    /// Fails with a descriptive message if either asset is missing or
    /// unreadable.
    pub fn new(
        ttf_context: &'a Sdl2TtfContext,
        texture_creator: &'a TextureCreator<WindowContext>,
        screen_width: u32,
    ) -> Result<Self, String> {
        let font = ttf_context
            .load_font(FONT_PATH, FONT_SIZE)
            .map_err(|e| format!("Failed to load font '{}': {}", FONT_PATH, e))?;
        let background = texture_creator
            .load_texture(BACKGROUND_PATH)
            .map_err(|e| format!("Failed to load background '{}': {}", BACKGROUND_PATH, e))?;

        Ok(Dashboard {
            font,
            texture_creator,
            background,
            menu_options: MenuOption::all(),
            selected_option: None,
            screen_width,
            clock: FrameClock::new(TARGET_FPS),
        })
    }

    /// Runs the menu loop until the user quits
    ///
    /// Each iteration handles pending input, draws one frame, presents it,
    /// then waits out the rest of the frame budget.
    pub fn run(
        &mut self,
        canvas: &mut Canvas<Window>,
        event_pump: &mut EventPump,
    ) -> Result<(), String> {
        'running: loop {
            if self.handle_events(event_pump)? == MenuFlow::Quit {
                break 'running;
            }
            self.draw(canvas)?;
            canvas.present();
            self.clock.tick();
        }
        Ok(())
    }

    /// Drains pending events in arrival order
    pub fn handle_events(&mut self, event_pump: &mut EventPump) -> Result<MenuFlow, String> {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return Ok(MenuFlow::Quit),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    if self.handle_mouse_click(Point::new(x, y))? == MenuFlow::Quit {
                        return Ok(MenuFlow::Quit);
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Up),
                    ..
                } => self.move_selection(-1),
                Event::KeyDown {
                    keycode: Some(Keycode::Down),
                    ..
                } => self.move_selection(1),
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } => {
                    if self.execute_selected_option() == MenuFlow::Quit {
                        return Ok(MenuFlow::Quit);
                    }
                }
                _ => {}
            }
        }
        Ok(MenuFlow::Continue)
    }

    /// Selects and executes the first option whose rectangle contains the
    /// click point; a miss changes nothing
    fn handle_mouse_click(&mut self, pos: Point) -> Result<MenuFlow, String> {
        for option in self.menu_options {
            if self.option_rect(option)?.contains_point(pos) {
                self.selected_option = Some(option);
                return Ok(self.execute_selected_option());
            }
        }
        Ok(MenuFlow::Continue)
    }

    /// Moves the selection by one step with wraparound
    ///
    /// The first navigation on a fresh menu selects the first entry.
    fn move_selection(&mut self, direction: i32) {
        let index = next_index(
            self.selected_option.map(|o| o.index()),
            direction,
            self.menu_options.len(),
        );
        self.selected_option = Some(self.menu_options[index]);
    }

    /// Acts on the current selection; no-op when nothing is selected
    ///
    /// PLAY and HIGH SCORE only print a notice for now, until their
    /// screens exist.
    fn execute_selected_option(&mut self) -> MenuFlow {
        match self.selected_option {
            Some(MenuOption::Play) => {
                println!("Starting the game!");
                MenuFlow::Continue
            }
            Some(MenuOption::HighScore) => {
                println!("Viewing High Score");
                MenuFlow::Continue
            }
            Some(MenuOption::Quit) => MenuFlow::Quit,
            None => MenuFlow::Continue,
        }
    }

    /// On-screen rectangle of an option's label, sized from the live text
    /// measurement
    fn option_rect(&self, option: MenuOption) -> Result<Rect, String> {
        let (width, height) = self
            .font
            .size_of(option.label())
            .map_err(|e| e.to_string())?;
        Ok(centered_rect(
            option_center(self.screen_width, option.index()),
            width,
            height,
        ))
    }

    /// Draws one frame into the back buffer; the caller presents it
    pub fn draw(&mut self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let caption = format!(
            "Space Invaders running with {} FPS",
            self.clock.fps() as u32
        );
        canvas
            .window_mut()
            .set_title(&caption)
            .map_err(|e| e.to_string())?;

        let query = self.background.query();
        canvas.copy(
            &self.background,
            None,
            Rect::new(0, 0, query.width, query.height),
        )?;

        self.draw_label(
            canvas,
            "Space Invaders",
            TITLE_COLOR,
            ((self.screen_width / 2) as i32, TITLE_Y),
        )?;

        for option in self.menu_options {
            let color = if self.selected_option == Some(option) {
                SELECTED_COLOR
            } else {
                UNSELECTED_COLOR
            };
            let center = option_center(self.screen_width, option.index());
            self.draw_label(canvas, option.label(), color, center)?;
        }

        Ok(())
    }

    /// Renders text centered on the given point
    fn draw_label(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        color: Color,
        center: (i32, i32),
    ) -> Result<(), String> {
        let surface = self
            .font
            .render(text)
            .blended(color)
            .map_err(|e| e.to_string())?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;
        let TextureQuery { width, height, .. } = texture.query();
        canvas.copy(&texture, None, centered_rect(center, width, height))
    }
}

/// Next selection index after moving `step` (-1 or +1) with wraparound
///
/// With no current selection, any move lands on the first entry.
pub fn next_index(current: Option<usize>, step: i32, len: usize) -> usize {
    match current {
        Some(index) => (index as i32 + step).rem_euclid(len as i32) as usize,
        None => 0,
    }
}

/// Screen-space center of the menu entry at `index`
pub fn option_center(screen_width: u32, index: usize) -> (i32, i32) {
    (
        (screen_width / 2) as i32,
        MENU_TOP + index as i32 * MENU_SPACING,
    )
}

/// Rectangle of the given size centered on a point
fn centered_rect(center: (i32, i32), width: u32, height: u32) -> Rect {
    Rect::from_center(Point::new(center.0, center.1), width, height)
}

#[cfg(test)]
mod tests {
    // The dashboard itself needs a live SDL2 context (window, font,
    // textures), so these tests cover the navigation and layout logic it
    // delegates to. Rendering is verified manually in the running menu.

    use super::*;

    #[test]
    fn test_next_index_stays_in_range() {
        for step in [-1, 1] {
            for start in 0..3 {
                let next = next_index(Some(start), step, 3);
                assert!(next < 3);
                assert_eq!(next as i32, (start as i32 + step).rem_euclid(3));
            }
        }
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        // PLAY (index 0) + up = QUIT (index 2)
        assert_eq!(next_index(Some(0), -1, 3), 2);
    }

    #[test]
    fn test_up_from_second_moves_to_first() {
        // HIGH SCORE (index 1) + up = PLAY (index 0)
        assert_eq!(next_index(Some(1), -1, 3), 0);
    }

    #[test]
    fn test_down_from_last_wraps_to_first() {
        assert_eq!(next_index(Some(2), 1, 3), 0);
    }

    #[test]
    fn test_first_move_selects_first_entry() {
        // A fresh menu has no selection; the first press lands on PLAY
        assert_eq!(next_index(None, 1, 3), 0);
        assert_eq!(next_index(None, -1, 3), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for start in 0..3 {
            let mut index = start;
            for _ in 0..3 {
                index = next_index(Some(index), 1, 3);
            }
            assert_eq!(index, start);

            for _ in 0..6 {
                index = next_index(Some(index), 1, 3);
            }
            assert_eq!(index, start);
        }
    }

    #[test]
    fn test_option_centers() {
        for width in [640u32, 1280, 1920] {
            for index in 0..3 {
                let (cx, cy) = option_center(width, index);
                assert_eq!(cx, (width / 2) as i32);
                assert_eq!(cy, 200 + index as i32 * 80);
            }
        }
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let rect = centered_rect((640, 200), 100, 40);
        assert_eq!(rect.center(), Point::new(640, 200));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 40);
    }

    #[test]
    fn test_click_outside_all_rects_misses() {
        // Rectangles the size of a typical rendered label
        let rects: Vec<Rect> = (0..3)
            .map(|i| centered_rect(option_center(1280, i), 120, 36))
            .collect();

        let miss = Point::new(10, 10);
        assert!(rects.iter().all(|r| !r.contains_point(miss)));

        // A point inside the second entry hits only the second entry
        let hit = Point::new(640, 280);
        assert!(!rects[0].contains_point(hit));
        assert!(rects[1].contains_point(hit));
        assert!(!rects[2].contains_point(hit));
    }
}
