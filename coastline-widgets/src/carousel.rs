use coastline_core::{RepeatingTask, TaskState, Timer};
use std::time::Duration;

/// Multi-item strip that scrolls one slide at a time, several slides visible at once.
///
/// The index never advances so far that fewer than `visible` slides would be
/// on screen; it wraps to the first slide instead.
#[derive(Debug)]
pub struct GridCarousel<T: Timer> {
    index: usize,
    slide_count: usize,
    visible: usize,
    task: RepeatingTask<T>,
}

impl<T: Timer> GridCarousel<T> {
    /// Returns `None` for an empty strip; there is nothing to rotate.
    pub fn new(slide_count: usize, visible: usize, timer: T, period: Duration) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            slide_count,
            visible: visible.max(1),
            task: RepeatingTask::new(timer, period),
        })
    }

    pub fn start(&mut self) {
        self.task.start();
    }

    /// Auto-advance step. Returns the new slide index.
    pub fn tick(&mut self) -> usize {
        self.index += 1;
        if self.index >= self.slide_count.saturating_sub(self.visible - 1) {
            self.index = 0;
        }
        tracing::trace!(index = self.index, "Grid carousel advanced");
        self.index
    }

    /// Jump to the slide behind indicator `index` and restart the auto-advance clock.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.slide_count {
            return None;
        }
        self.index = index;
        self.task.reset();
        Some(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Active flag for each indicator
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == self.index).collect()
    }

    /// CSS transform placing the current slide at the left edge
    pub fn transform(&self, slide_width: f64) -> String {
        format!("translateX(-{}px)", slide_width * self.index as f64)
    }

    pub fn task(&self) -> &RepeatingTask<T> {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut RepeatingTask<T> {
        &mut self.task
    }
}

/// One hero transition: which slide loses the active class, which gains it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStep {
    pub deactivate: usize,
    pub activate: usize,
}

impl HeroStep {
    pub fn transform(&self) -> String {
        format!("translateX({}%)", -(self.activate as i64) * 100)
    }
}

/// Full-width slides advanced one at a time; stops for good once the pointer enters.
#[derive(Debug)]
pub struct HeroCarousel<T: Timer> {
    index: usize,
    slide_count: usize,
    task: RepeatingTask<T>,
}

impl<T: Timer> HeroCarousel<T> {
    pub fn new(slide_count: usize, timer: T, period: Duration) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            slide_count,
            task: RepeatingTask::new(timer, period),
        })
    }

    pub fn start(&mut self) {
        self.task.start();
    }

    /// Initial active flag per slide: only the first is active
    pub fn initial_states(&self) -> Vec<bool> {
        (0..self.slide_count).map(|i| i == 0).collect()
    }

    pub fn tick(&mut self) -> HeroStep {
        let deactivate = self.index;
        self.index = (self.index + 1) % self.slide_count;
        HeroStep {
            deactivate,
            activate: self.index,
        }
    }

    pub fn pointer_entered(&mut self) {
        if self.task.state() != TaskState::Cancelled {
            tracing::debug!("Hero carousel paused");
        }
        self.task.cancel();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn task(&self) -> &RepeatingTask<T> {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut RepeatingTask<T> {
        &mut self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coastline_core::ManualTimer;

    const GRID_PERIOD: Duration = Duration::from_millis(3000);
    const HERO_PERIOD: Duration = Duration::from_millis(2000);

    fn grid(slides: usize) -> GridCarousel<ManualTimer> {
        GridCarousel::new(slides, 3, ManualTimer::new(), GRID_PERIOD).unwrap()
    }

    #[test]
    fn test_grid_never_passes_last_full_triple() {
        for slides in 3..12 {
            let mut carousel = grid(slides);
            let mut seen_wrap = false;
            for _ in 0..(slides * 3) {
                let previous = carousel.index();
                let index = carousel.tick();
                assert!(index <= slides - 3, "{} slides produced index {}", slides, index);
                if index == 0 {
                    // Wraps exactly when the bound is reached
                    assert_eq!(previous, slides - 3);
                    seen_wrap = true;
                }
            }
            assert!(seen_wrap);
        }
    }

    #[test]
    fn test_grid_sequence_for_six_slides() {
        let mut carousel = grid(6);
        let indices: Vec<usize> = (0..5).map(|_| carousel.tick()).collect();
        assert_eq!(indices, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_grid_with_fewer_slides_than_visible_stays_put() {
        let mut carousel = grid(2);
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn test_grid_with_huge_visible_count_stays_put() {
        let mut carousel = GridCarousel::new(5, usize::MAX, ManualTimer::new(), GRID_PERIOD).unwrap();
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn test_grid_empty_strip_is_not_a_carousel() {
        assert!(GridCarousel::new(0, 3, ManualTimer::new(), GRID_PERIOD).is_none());
    }

    #[test]
    fn test_grid_select_resets_timer() {
        let mut carousel = grid(6);
        carousel.start();
        assert_eq!(carousel.select(5), Some(5));

        assert_eq!(carousel.indicator_states(), vec![false, false, false, false, false, true]);
        assert_eq!(carousel.task().timer().arm_count(), 2);
        assert_eq!(carousel.task().timer().disarm_count(), 1);
        assert_eq!(carousel.task().state(), TaskState::Running);

        // From a manually chosen tail slide the next tick wraps
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.select(9), None);
    }

    #[test]
    fn test_grid_transform() {
        let mut carousel = grid(6);
        assert_eq!(carousel.transform(300.0), "translateX(-0px)");
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.transform(312.5), "translateX(-625px)");
    }

    #[test]
    fn test_hero_wraps_around() {
        let mut hero = HeroCarousel::new(3, ManualTimer::new(), HERO_PERIOD).unwrap();
        assert_eq!(hero.initial_states(), vec![true, false, false]);

        let steps: Vec<HeroStep> = (0..3).map(|_| hero.tick()).collect();
        assert_eq!(steps[0], HeroStep { deactivate: 0, activate: 1 });
        assert_eq!(steps[1].transform(), "translateX(-200%)");
        assert_eq!(steps[2], HeroStep { deactivate: 2, activate: 0 });
        assert_eq!(steps[2].transform(), "translateX(0%)");
    }

    #[test]
    fn test_hero_pointer_enter_cancels_for_good() {
        let mut hero = HeroCarousel::new(3, ManualTimer::new(), HERO_PERIOD).unwrap();
        hero.start();
        assert_eq!(hero.task().timer().armed(), Some(HERO_PERIOD));

        hero.pointer_entered();
        hero.start();
        assert_eq!(hero.task().state(), TaskState::Cancelled);
        assert_eq!(hero.task().timer().armed(), None);
    }
}
