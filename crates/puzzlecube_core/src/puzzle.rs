use cubemath::SignedAxis;
use puzzlecube_prefs::{FaceColors, Preferences, RotationAnimation};
use rand::Rng;
use web_time::Duration;

use crate::animation::{ExplodeAnimation, LayerAnimation};
use crate::cube::{CUBE_COUNT, solved_cubes, validate_cubes};
use crate::scramble::random_twists;
use crate::timer::PuzzleTimer;
use crate::{Cube, InvalidCubes, Layer, LayerTwist, PuzzleEvent, solved};

/// Value of the timer when a new game starts. Negative values count down the
/// inspection period.
pub const STARTING_SECONDS: i64 = -15;

/// State of a 3x3x3 puzzle: its cubies, the undo history, counters, and any
/// animation in progress.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    cubes: [Cube; CUBE_COUNT],

    seconds: i64,
    moves: u64,
    timer: PuzzleTimer,

    /// Stack of turned layers to undo, most recent last.
    history: Vec<Layer>,

    /// Layer rotation in progress.
    animation: Option<LayerAnimation>,
    /// Explode effect in progress.
    explode: Option<ExplodeAnimation>,
    /// Brightness of the puzzle, from 0.0 to 1.0.
    brightness: f32,

    rotation_animation: RotationAnimation,
    colors: FaceColors,

    /// Events not yet taken by the caller.
    events: Vec<PuzzleEvent>,
}
impl PuzzleState {
    /// Constructs a solved puzzle configured from `prefs`.
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            cubes: solved_cubes(),

            seconds: STARTING_SECONDS,
            moves: 0,
            timer: PuzzleTimer::default(),

            history: vec![],

            animation: None,
            explode: None,
            brightness: 1.0,

            rotation_animation: prefs.animation.rotation_animation,
            colors: prefs.colors,

            events: vec![],
        }
    }

    /// Constructs a puzzle from previously saved cubes. Either every cube is
    /// accepted or an error is returned.
    pub fn with_cubes(
        prefs: &Preferences,
        cubes: impl IntoIterator<Item = Cube>,
    ) -> Result<Self, InvalidCubes> {
        let mut ret = Self::new(prefs);
        ret.cubes = validate_cubes(cubes)?;
        Ok(ret)
    }

    /// Returns all cubes, indexed by their fixed index.
    pub fn cubes(&self) -> &[Cube; CUBE_COUNT] {
        &self.cubes
    }
    /// Returns the timer value in seconds.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }
    /// Sets the timer value in seconds.
    pub fn set_seconds(&mut self, seconds: i64) {
        self.seconds = seconds;
    }
    /// Returns the number of moves made.
    pub fn moves(&self) -> u64 {
        self.moves
    }
    /// Sets the number of moves made.
    pub fn set_moves(&mut self, moves: u64) {
        self.moves = moves;
    }
    /// Returns how layer rotations are animated.
    pub fn rotation_animation(&self) -> RotationAnimation {
        self.rotation_animation
    }
    /// Sets how layer rotations are animated.
    pub fn set_rotation_animation(&mut self, rotation_animation: RotationAnimation) {
        self.rotation_animation = rotation_animation;
    }
    /// Returns the sticker colors.
    pub fn colors(&self) -> &FaceColors {
        &self.colors
    }
    /// Returns the sticker colors as currently shown, faded by the
    /// brightness of the puzzle.
    pub fn displayed_colors(&self) -> FaceColors {
        FaceColors::from_list(self.colors.to_list().map(|c| c.dimmed(self.brightness)))
    }
    /// Sets the sticker colors.
    pub fn set_colors(&mut self, colors: FaceColors) {
        self.colors = colors;
    }

    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        solved::is_solved(&self.cubes)
    }
    /// Returns whether there is nothing to undo.
    pub fn is_rotations_empty(&self) -> bool {
        self.history.is_empty()
    }
    /// Returns whether a layer rotation is animating.
    pub fn is_layer_rotating(&self) -> bool {
        self.animation.is_some()
    }
    /// Returns whether the explode effect is animating.
    pub fn is_exploding(&self) -> bool {
        self.explode.is_some()
    }
    /// Returns whether any animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.is_layer_rotating() || self.is_exploding()
    }
    /// Returns the brightness of the puzzle, from 1.0 (normal) to 0.0
    /// (black).
    pub fn brightness(&self) -> f32 {
        self.brightness
    }
    /// Returns the layer rotation in progress, if any.
    pub fn current_animation(&self) -> Option<&LayerAnimation> {
        self.animation.as_ref()
    }

    /// Returns the cubes at `depth` along `axis`.
    pub fn layer(&self, axis: SignedAxis, depth: i32) -> Layer {
        Layer::new(&self.cubes, axis, depth)
    }

    /// Removes and returns all pending events.
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Turns a layer a quarter turn, animated over `duration` according to
    /// the rotation animation mode. Does nothing if a rotation is already
    /// animating.
    ///
    /// Locations are updated before the animation starts. The move counter
    /// is incremented; if `allow_undo` is true, the turn can be undone.
    pub fn rotate_layer_animation(
        &mut self,
        axis: SignedAxis,
        depth: i32,
        duration: Duration,
        allow_undo: bool,
    ) {
        let twist = LayerTwist::new(axis, depth);
        if self.is_animating() {
            log::debug!("ignoring {twist} while another animation is running");
            return;
        }
        if !twist.is_valid() {
            log::warn!("ignoring {twist}: no layer at that depth");
            return;
        }

        let layer = self.layer(axis, depth);
        layer.snapshot(&mut self.cubes);
        layer.update_locations(&mut self.cubes);

        if allow_undo {
            self.push_history(layer.clone());
        }

        self.moves += 1;
        self.events.push(PuzzleEvent::MoveCounterChanged { count: self.moves });

        self.start_rotation(layer, duration);
    }

    /// Turns a layer a quarter turn instantly, without counting a move or
    /// recording history. Does nothing if an animation is running.
    pub fn rotate_layer(&mut self, axis: SignedAxis, depth: i32) {
        let twist = LayerTwist::new(axis, depth);
        if self.is_animating() {
            log::debug!("ignoring {twist} while another animation is running");
            return;
        }
        let layer = self.layer(axis, depth);
        layer.snapshot(&mut self.cubes);
        layer.update_locations(&mut self.cubes);
        layer.rotate(&mut self.cubes, 90.0);
    }

    /// Undoes the most recent undoable rotation, animated over `duration`.
    /// Does nothing if there is nothing to undo or a rotation is animating.
    /// The move counter is not changed.
    pub fn undo_rotation(&mut self, duration: Duration) {
        if self.is_animating() {
            log::debug!("ignoring undo while another animation is running");
            return;
        }
        let Some(mut layer) = self.history.pop() else {
            return;
        };
        layer.reverse(&mut self.cubes);
        layer.update_locations(&mut self.cubes);
        self.start_rotation(layer, duration);
    }

    /// Applies `count` random instant turns, never turning around the same
    /// axis twice in a row, and returns them.
    pub fn scramble(&mut self, count: usize) -> Vec<LayerTwist> {
        self.scramble_with_rng(count, &mut rand::rng())
    }
    /// Same as [`Self::scramble()`], but with a caller-provided random number
    /// generator.
    pub fn scramble_with_rng<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<LayerTwist> {
        if self.is_animating() {
            log::debug!("ignoring scramble while an animation is running");
            return vec![];
        }
        let twists = random_twists(count, rng);
        for twist in &twists {
            self.rotate_layer(twist.axis, twist.depth);
        }
        log::debug!("scrambled with {} twists", twists.len());
        twists
    }

    /// Starts or resumes the timer.
    pub fn start_timer(&mut self) {
        self.timer.start();
    }
    /// Pauses the timer.
    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }
    /// Discards the partial second accumulated by the timer.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }
    /// Returns whether the timer is running.
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Starts the explode effect. Does nothing if an animation is running.
    /// Locations are not changed.
    pub fn explode(&mut self) {
        if self.is_animating() {
            log::debug!("ignoring explode while another animation is running");
            return;
        }
        let layers = [-1, 0, 1].map(|depth| self.layer(SignedAxis::PosX, depth));
        for layer in &layers {
            layer.snapshot(&mut self.cubes);
        }
        self.explode = Some(ExplodeAnimation::new(layers));
    }

    /// Advances the timer and any animation by `delta`. Returns whether an
    /// animation is still running.
    pub fn tick(&mut self, delta: Duration) -> bool {
        for _ in 0..self.timer.proceed(delta) {
            self.seconds += 1;
            self.events.push(PuzzleEvent::TimerChanged {
                seconds: self.seconds,
            });
        }

        if let Some(anim) = &mut self.animation {
            if anim.proceed(delta, &mut self.cubes) {
                self.animation = None;
                self.finish_rotation();
            }
        }

        if let Some(anim) = &mut self.explode {
            let done = anim.proceed(delta, &mut self.cubes);
            self.brightness = anim.brightness();
            if done {
                self.explode = None;
            }
        }

        self.is_animating()
    }

    fn push_history(&mut self, layer: Layer) {
        match self.history.try_reserve(1) {
            Ok(()) => self.history.push(layer),
            Err(e) => {
                log::warn!("clearing undo history: {e}");
                self.history.clear();
            }
        }
    }

    fn start_rotation(&mut self, layer: Layer, duration: Duration) {
        self.events.push(PuzzleEvent::RotationStarted);
        match self.rotation_animation.interpolate_fn() {
            Some(interpolate) if !duration.is_zero() => {
                self.animation = Some(LayerAnimation::new(layer, duration, interpolate));
            }
            _ => {
                layer.rotate(&mut self.cubes, 90.0);
                self.finish_rotation();
            }
        }
    }

    fn finish_rotation(&mut self) {
        let solved = self.is_solved();
        self.events.push(PuzzleEvent::RotationComplete { solved });
    }
}
