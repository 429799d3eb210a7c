//! Scripted paging sessions replayed against a headless pager.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use tessera_pageview::{
    BasicPage, Page, PageViewConfig, PagedScrollController, Size, Touch, TouchPhase, glam::Vec2,
};
use tracing::{debug, info, warn};

/// Upper bound on frames spent waiting for a glide to settle.
const MAX_SETTLE_FRAMES: u32 = 600;

pub type DemoPage = BasicPage<String>;
pub type DemoPager = PagedScrollController<DemoPage>;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub fps: u32,
    pub content: [f32; 2],
    pub pages: Vec<String>,
    pub pager: PageViewConfig,
    #[serde(rename = "step")]
    pub steps: Vec<Step>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            fps: 60,
            content: [320.0, 480.0],
            pages: vec!["first".to_owned(), "second".to_owned()],
            pager: PageViewConfig::default(),
            steps: Vec::new(),
        }
    }
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Moves the touch by `dx`, `dy`, spread over `frames` move events.
    Drag {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
        #[serde(default = "default_drag_frames")]
        frames: u32,
        /// Route the touch through the child interception path.
        #[serde(default)]
        from_child: bool,
    },
    /// Lifts the touch and waits for the pager to settle.
    Release,
    ScrollTo {
        page: usize,
    },
    Wait {
        seconds: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
}

fn default_drag_frames() -> u32 {
    10
}

struct ActiveTouch {
    location: Vec2,
    from_child: bool,
}

/// A pager plus the simulated clock and touch driving it.
pub struct Session {
    pager: DemoPager,
    dt: f32,
    frame: u64,
    turns: Arc<AtomicUsize>,
    touch: Option<ActiveTouch>,
}

impl Session {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        ensure!(scenario.fps > 0, "fps must be positive");
        let mut pager = DemoPager::try_with_config(scenario.pager.clone())
            .context("Invalid pager configuration")?;
        pager.set_content_size(Size::from(scenario.content));
        for (index, label) in scenario.pages.iter().enumerate() {
            pager.add_widget_to_page(label.clone(), index, true);
        }

        let turns = Arc::new(AtomicUsize::new(0));
        let counter = turns.clone();
        pager.add_event_listener(move |pager, event| {
            counter.fetch_add(1, Ordering::Relaxed);
            info!(?event, page = ?pager.cur_page_index(), "Page turned");
        });

        Ok(Self {
            pager,
            dt: 1.0 / scenario.fps as f32,
            frame: 0,
            turns,
            touch: None,
        })
    }

    pub fn pager(&self) -> &DemoPager {
        &self.pager
    }

    pub fn turns(&self) -> usize {
        self.turns.load(Ordering::Relaxed)
    }

    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.apply(step);
        }
    }

    pub fn apply(&mut self, step: &Step) {
        debug!(frame = self.frame, ?step, "Applying step");
        match *step {
            Step::Drag {
                dx,
                dy,
                frames,
                from_child,
            } => self.drag(Vec2::new(dx, dy), frames, from_child),
            Step::Release => self.release(),
            Step::ScrollTo { page } => {
                if !self.pager.scroll_to_page(page) {
                    warn!(page, "No such page");
                }
            }
            Step::Wait { seconds } => {
                let frames = (seconds.max(0.0) / self.dt).round() as u32;
                for _ in 0..frames {
                    self.tick();
                }
            }
            Step::Resize { width, height } => self.pager.set_content_size(Size::new(width, height)),
        }
    }

    fn drag(&mut self, delta: Vec2, frames: u32, from_child: bool) {
        let (mut location, from_child) = match &self.touch {
            Some(touch) => (touch.location, touch.from_child),
            None => {
                let centre = self.pager.content_size().to_vec2() / 2.0;
                let touch = Touch::at(centre);
                if from_child {
                    self.pager.intercept_touch(TouchPhase::Began, &touch);
                } else if !self.pager.on_touch_began(&touch) {
                    warn!("Touch rejected");
                    return;
                }
                (centre, from_child)
            }
        };

        let frames = frames.max(1);
        let step = delta / frames as f32;
        for _ in 0..frames {
            let next = location + step;
            let touch = Touch::new(next, location);
            if from_child {
                self.pager.intercept_touch(TouchPhase::Moved, &touch);
            } else {
                self.pager.on_touch_moved(&touch);
            }
            location = next;
            self.tick();
        }
        self.touch = Some(ActiveTouch {
            location,
            from_child,
        });
    }

    fn release(&mut self) {
        let Some(touch) = self.touch.take() else {
            warn!("Release without an active touch");
            return;
        };
        if touch.from_child {
            self.pager
                .intercept_touch(TouchPhase::Ended, &Touch::at(touch.location));
        } else {
            self.pager.on_touch_ended();
        }

        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.pager.is_auto_scrolling() {
                return;
            }
            self.tick();
        }
        warn!("Pager still gliding after {MAX_SETTLE_FRAMES} frames");
    }

    fn tick(&mut self) {
        self.pager.update(self.dt);
        self.frame += 1;
    }

    pub fn log_summary(&self) {
        info!(
            frames = self.frame,
            turns = self.turns(),
            page = ?self.pager.cur_page_index(),
            "Session finished"
        );
        for (index, page) in self.pager.pages().iter().enumerate() {
            let (labels, rect) = page.with(|page| (page.children().to_vec(), page.rect()));
            debug!(index, ?labels, x = rect.left(), y = rect.bottom(), "Page");
        }
    }
}
