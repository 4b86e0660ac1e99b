//! The pick-focus-reset interaction engine.
//!
//! [`ViewerEngine`] owns the viewport context, the loaded scene, the focus
//! registry, the focus state machine, the camera motion controller and
//! the panel binding. Hosts feed it input and call [`ViewerEngine::tick`]
//! once per frame, then read [`ViewerEngine::camera`] to render.

mod accessors;
/// Commands accepted by [`ViewerEngine::execute`].
pub mod command;
/// Camera plus viewport rectangle.
pub mod context;
mod input;
mod interaction;

pub use command::ViewerCommand;
pub use context::ViewportContext;

use crate::camera::tween::sanitize_dt;
use crate::camera::{CameraPose, MotionController};
use crate::focus::{FocusFraming, FocusMachine};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::panel::{PanelBinding, PanelSurface};
use crate::picking::HitResolver;
use crate::registry::FocusRegistry;
use crate::scene::{NodeId, SceneGraph};

/// Viewport size assumed until the host calls
/// [`ViewerEngine::set_viewport`].
const DEFAULT_VIEWPORT: (f32, f32) = (800.0, 600.0);

/// Clickable target currently under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    /// The clickable node the pointer resolves to.
    pub node: NodeId,
    /// Its target id.
    pub id: String,
}

/// Model state that only exists after load completion.
#[derive(Debug)]
struct LoadedModel {
    scene: SceneGraph,
    root: NodeId,
    default_pose: CameraPose,
}

/// Interactive viewer core.
///
/// # Frame loop
///
/// ```ignore
/// engine.handle_input(event);     // from the window event handler
/// engine.tick(dt);                // once per presented frame
/// renderer.draw(engine.camera()); // read the pose after ticking
/// ```
///
/// # Consistency
///
/// Focus state, panel visibility and free-camera control enablement are
/// changed together inside one call. Between calls, `Focused(id)` always
/// means the panel shows `id` with controls locked, and `Overview` always
/// means the panel is hidden with controls unlocked.
pub struct ViewerEngine<P: PanelSurface> {
    /// Orbit camera and viewport rectangle.
    context: ViewportContext,
    /// Scene, root and default pose, once loaded.
    model: Option<LoadedModel>,
    /// Id → payload map.
    registry: FocusRegistry,
    /// Ray → target resolution.
    resolver: HitResolver,
    /// Focus pose computation.
    framing: FocusFraming,
    /// Overview/focused transition table.
    focus: FocusMachine,
    /// The single in-flight camera transition.
    motion: MotionController,
    /// Panel surface with idempotent show/hide.
    panel: PanelBinding<P>,
    /// Raw event → command translation.
    input: InputProcessor,
    /// Target under the pointer, from the last hover update.
    hovered: Option<HoverTarget>,
    /// Options the engine was built with.
    options: Options,
}

impl<P: PanelSurface> ViewerEngine<P> {
    /// Engine with no model loaded. Picks are no-ops until
    /// [`on_model_loaded`](Self::on_model_loaded) is called.
    pub fn new(options: Options, registry: FocusRegistry, panel: P) -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        log::debug!("viewer engine created with {} focus targets", registry.len());
        Self {
            context: ViewportContext::new(&options.camera, width, height),
            model: None,
            registry,
            resolver: HitResolver::new(options.focus.material_separator.clone()),
            framing: FocusFraming::from_options(&options.focus),
            focus: FocusMachine::new(options.focus.repick),
            motion: MotionController::new(),
            panel: PanelBinding::new(panel),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            hovered: None,
            options,
        }
    }

    /// Loader completion: activate picking and capture the default pose.
    ///
    /// The camera is centered on the root's world bounds and backed off
    /// along +Z to `diagonal * initial_distance_factor`. Only the first
    /// call has any effect.
    pub fn on_model_loaded(&mut self, scene: SceneGraph, root: NodeId) {
        let Some(scene) = self.prepare_scene(scene, root) else {
            return;
        };
        match scene.world_bounds(root) {
            Some(bounds) => self.context.camera.fit_to_bounds(
                &bounds,
                self.options.camera.initial_distance_factor,
            ),
            None => log::warn!("loaded model has no geometry; keeping camera pose"),
        }
        let default_pose = self.context.camera.pose();
        self.install(scene, root, default_pose);
    }

    /// Loader completion with a host-supplied default pose instead of
    /// automatic framing.
    pub fn on_model_loaded_with_pose(
        &mut self,
        scene: SceneGraph,
        root: NodeId,
        default_pose: CameraPose,
    ) {
        let Some(scene) = self.prepare_scene(scene, root) else {
            return;
        };
        self.context.camera.set_pose(default_pose);
        self.install(scene, root, default_pose);
    }

    /// Shared load checks. `None` means the notification is ignored.
    fn prepare_scene(
        &self,
        mut scene: SceneGraph,
        root: NodeId,
    ) -> Option<SceneGraph> {
        if self.model.is_some() {
            log::warn!("model already loaded; ignoring load notification");
            return None;
        }
        if scene.node(root).is_none() {
            log::warn!("load notification with unknown root {root:?} ignored");
            return None;
        }
        if self.options.focus.mark_meshes_clickable {
            let marked = scene.mark_meshes_clickable(root);
            log::debug!("marked {marked} mesh nodes clickable");
        }
        Some(scene)
    }

    fn install(&mut self, scene: SceneGraph, root: NodeId, default_pose: CameraPose) {
        log::info!(
            "model loaded: {} nodes, default pose {:?} -> {:?}",
            scene.len(),
            default_pose.position,
            default_pose.look_at
        );
        self.model = Some(LoadedModel {
            scene,
            root,
            default_pose,
        });
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// Runs the camera transition first, then idle rotation. Idle rotation
    /// only runs in the overview, and not on any frame that started with a
    /// transition in flight. Returns `true` if the camera moved.
    pub fn tick(&mut self, dt: f32) -> bool {
        let dt = sanitize_dt(dt);
        let was_moving = self.motion.is_active();
        let mut moved = false;

        if let Some(step) = self.motion.advance(dt) {
            self.context.camera.set_pose(step.pose);
            moved = true;
            if step.completed {
                log::debug!("{:?} transition landed", step.kind);
            }
        }

        if !was_moving && self.idle_rotation_allowed() {
            moved |= self.context.camera.turntable(dt);
        }
        moved
    }

    fn idle_rotation_allowed(&self) -> bool {
        self.model.is_some()
            && !self.focus.state().is_focused()
            && !self.motion.is_active()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec2, Vec3};

    use super::*;
    use crate::focus::FocusState;
    use crate::input::{InputEvent, MouseButton};
    use crate::options::RepickPolicy;
    use crate::panel::{PanelCall, RecordingPanel};
    use crate::picking::PickOutcome;
    use crate::registry::Payload;
    use crate::scene::Mesh;
    use crate::util::easing::EasingFunction;

    const FRAME: f32 = 1.0 / 60.0;
    const CENTER: (f32, f32) = (400.0, 300.0);
    /// Pixel over the Sphere001 box while at the default pose.
    const SPHERE001_PX: (f32, f32) = (545.0, 300.0);
    /// Pixel over the unregistered `rock` box while at the default pose.
    const ROCK_PX: (f32, f32) = (255.0, 300.0);

    fn default_pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO)
    }

    fn demo_scene() -> (SceneGraph, NodeId) {
        let mut scene = SceneGraph::new();
        let root = scene.add_node(None, "Scene", Affine3A::IDENTITY);
        for (name, x) in [
            ("Sphere002_Material_01", 0.0),
            ("Sphere001_Material_02", 100.0),
            ("rock", -100.0),
        ] {
            let node = scene.add_node(
                Some(root),
                name,
                Affine3A::from_translation(Vec3::new(x, 0.0, 0.0)),
            );
            let _ = scene.set_mesh(node, Mesh::cuboid(Vec3::splat(10.0)));
        }
        (scene, root)
    }

    fn registry() -> FocusRegistry {
        FocusRegistry::from_entries([
            ("Sphere001", Payload::new("Projects", "<p>projects</p>")),
            ("Sphere002", Payload::new("Contact", "<p>mail</p>")),
        ])
    }

    fn engine_with(options: Options) -> ViewerEngine<RecordingPanel> {
        let mut engine =
            ViewerEngine::new(options, registry(), RecordingPanel::default());
        let (scene, root) = demo_scene();
        engine.on_model_loaded_with_pose(scene, root, default_pose());
        engine
    }

    fn engine() -> ViewerEngine<RecordingPanel> {
        engine_with(Options::default())
    }

    fn run(engine: &mut ViewerEngine<RecordingPanel>, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            let _ = engine.tick(FRAME);
            assert_consistent(engine);
        }
    }

    /// Tick until the in-flight transition lands (and no further).
    fn settle(engine: &mut ViewerEngine<RecordingPanel>) {
        let mut frames = 0;
        while engine.is_transitioning() {
            let _ = engine.tick(FRAME);
            assert_consistent(engine);
            frames += 1;
            assert!(frames < 600, "transition never landed");
        }
    }

    fn click(engine: &mut ViewerEngine<RecordingPanel>, (x, y): (f32, f32)) {
        for event in [
            InputEvent::CursorMoved { x, y },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
        ] {
            let _ = engine.handle_input(event);
        }
        assert_consistent(engine);
    }

    fn assert_consistent(engine: &ViewerEngine<RecordingPanel>) {
        let controls = engine.camera_controller().controls();
        match engine.focus_state() {
            FocusState::Focused(id) => {
                assert!(engine.panel_visible());
                assert_eq!(engine.panel().shown_id(), Some(id.as_str()));
                assert!(!controls.rotate && !controls.zoom);
            }
            FocusState::Overview => {
                assert!(!engine.panel_visible());
                assert!(controls.rotate && controls.zoom);
            }
        }
    }

    #[test]
    fn end_to_end_focus_then_background_reset() {
        let mut engine = engine();
        assert_eq!(engine.default_pose(), Some(default_pose()));

        click(&mut engine, CENTER);
        assert_eq!(
            *engine.focus_state(),
            FocusState::Focused("Sphere002".to_owned())
        );
        assert_eq!(
            engine.panel().surface().calls,
            vec![PanelCall::Show {
                title: "Contact".to_owned(),
                content: "<p>mail</p>".to_owned(),
            }]
        );
        let focus_pose = engine.transition_target().unwrap();
        // Box of half-extent 10 at the origin: diagonal 20·√3.
        let size = 20.0 * 3f32.sqrt();
        assert_eq!(focus_pose.look_at, Vec3::ZERO);
        assert!(focus_pose
            .position
            .abs_diff_eq(Vec3::new(-0.6, 0.3, 1.0) * size, 1e-3));

        settle(&mut engine);
        assert_eq!(engine.camera_controller().pose(), focus_pose);

        // Top-left corner from the focus pose sees only empty space.
        click(&mut engine, (2.0, 2.0));
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert_eq!(engine.transition_target(), Some(default_pose()));
        assert_eq!(engine.panel().surface().calls.last(), Some(&PanelCall::Hide));

        settle(&mut engine);
        assert_eq!(engine.camera_controller().pose(), default_pose());
    }

    #[test]
    fn picks_before_load_are_noops() {
        let mut engine =
            ViewerEngine::new(Options::default(), registry(), RecordingPanel::default());
        let before = engine.camera_controller().pose();
        assert_eq!(engine.pick_at(CENTER.0, CENTER.1), None);
        engine.execute(ViewerCommand::Pick {
            x: CENTER.0,
            y: CENTER.1,
        });
        engine.execute(ViewerCommand::ResetView);
        engine.execute(ViewerCommand::RecenterCamera);
        assert!(!engine.tick(1.0));
        assert!(!engine.is_loaded());
        assert_eq!(engine.camera_controller().pose(), before);
        assert!(engine.panel().surface().calls.is_empty());
    }

    #[test]
    fn reset_in_overview_changes_nothing() {
        let mut engine = engine();
        let pose = engine.camera_controller().pose();
        let controls = engine.camera_controller().controls();
        let auto = engine.camera_controller().auto_rotate();

        assert!(!engine.reset_view());
        engine.execute(ViewerCommand::ResetView);
        let _ = engine.handle_input(InputEvent::OverlayClicked);
        let _ = engine.handle_input(InputEvent::KeyPressed {
            key: "Escape".to_owned(),
        });

        assert_eq!(engine.camera_controller().pose(), pose);
        assert_eq!(engine.camera_controller().controls(), controls);
        assert_eq!(engine.camera_controller().auto_rotate(), auto);
        assert!(!engine.is_transitioning());
        assert!(engine.panel().surface().calls.is_empty());
    }

    #[test]
    fn overlay_click_leaves_focus() {
        let mut engine = engine();
        click(&mut engine, CENTER);
        run(&mut engine, 0.3);
        let _ = engine.handle_input(InputEvent::OverlayClicked);
        assert_consistent(&engine);
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert_eq!(engine.transition_target(), Some(default_pose()));
    }

    #[test]
    fn unregistered_and_background_picks_in_overview_are_noops() {
        let mut engine = engine();
        assert!(matches!(
            engine.pick_at(ROCK_PX.0, ROCK_PX.1),
            Some(PickOutcome::Target(ref t)) if t.id == "rock"
        ));
        assert_eq!(engine.pick_at(5.0, 5.0), Some(PickOutcome::Background));
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert!(!engine.is_transitioning());
        assert!(engine.panel().surface().calls.is_empty());
    }

    #[test]
    fn ignore_policy_keeps_first_target() {
        let mut engine = engine();
        click(&mut engine, CENTER);
        let target = engine.transition_target();

        click(&mut engine, SPHERE001_PX);
        click(&mut engine, ROCK_PX);
        assert_eq!(engine.focus_state().focused_id(), Some("Sphere002"));
        assert_eq!(engine.transition_target(), target);
        assert_eq!(engine.panel().surface().calls.len(), 1);
    }

    #[test]
    fn retarget_policy_flies_to_new_target() {
        let mut options = Options::default();
        options.focus.repick = RepickPolicy::Retarget;
        let mut engine = engine_with(options);

        click(&mut engine, CENTER);
        // Camera has not moved yet, so the pixel still covers Sphere001.
        click(&mut engine, SPHERE001_PX);
        assert_eq!(engine.focus_state().focused_id(), Some("Sphere001"));
        assert_eq!(
            engine.transition_target().map(|p| p.look_at),
            Some(Vec3::new(100.0, 0.0, 0.0))
        );
        let calls = &engine.panel().surface().calls;
        assert_eq!(calls.len(), 2);
        assert!(!calls.contains(&PanelCall::Hide));
    }

    #[test]
    fn auto_rotation_suspended_while_focused_and_resetting() {
        let mut engine = engine();
        assert!(engine.camera_controller().auto_rotate());

        click(&mut engine, CENTER);
        settle(&mut engine);
        let settled = engine.camera_controller().pose();
        run(&mut engine, 0.5);
        assert_eq!(engine.camera_controller().pose(), settled);

        assert!(engine.reset_view());
        settle(&mut engine);
        // The landing frame does not rotate.
        assert_eq!(engine.camera_controller().pose(), default_pose());

        assert!(engine.tick(FRAME));
        let pose = engine.camera_controller().pose();
        assert_ne!(pose, default_pose());
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn gestures_are_ignored_while_focused() {
        let mut engine = engine();
        click(&mut engine, CENTER);
        settle(&mut engine);
        let pose = engine.camera_controller().pose();
        engine.execute(ViewerCommand::RotateCamera {
            delta: Vec2::new(50.0, 0.0),
        });
        engine.execute(ViewerCommand::Zoom { delta: 3.0 });
        assert_eq!(engine.camera_controller().pose(), pose);
    }

    #[test]
    fn recenter_returns_to_default_pose() {
        let mut engine = engine();
        run(&mut engine, 2.0);
        assert_ne!(engine.camera_controller().pose(), default_pose());

        engine.execute(ViewerCommand::RecenterCamera);
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert!(engine.is_transitioning());
        settle(&mut engine);
        assert_eq!(engine.camera_controller().pose(), default_pose());

        click(&mut engine, CENTER);
        engine.execute(ViewerCommand::RecenterCamera);
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert_consistent(&engine);
    }

    fn hover(engine: &mut ViewerEngine<RecordingPanel>, (x, y): (f32, f32)) {
        let _ = engine.handle_input(InputEvent::CursorMoved { x, y });
    }

    fn hovered_id(engine: &ViewerEngine<RecordingPanel>) -> Option<&str> {
        engine.hovered().map(|h| h.id.as_str())
    }

    #[test]
    fn hover_enters_switches_and_leaves() {
        let mut engine = engine();

        hover(&mut engine, CENTER);
        assert_eq!(hovered_id(&engine), Some("Sphere002"));
        // Same target again: no new highlight call.
        hover(&mut engine, (CENTER.0 + 1.0, CENTER.1));
        hover(&mut engine, SPHERE001_PX);
        assert_eq!(hovered_id(&engine), Some("Sphere001"));
        // Clickable but unregistered geometry still highlights.
        hover(&mut engine, ROCK_PX);
        assert_eq!(hovered_id(&engine), Some("rock"));
        hover(&mut engine, (5.0, 5.0));
        assert_eq!(engine.hovered(), None);

        let surface = engine.panel().surface();
        assert_eq!(
            surface.highlights,
            vec![
                Some("Sphere002".to_owned()),
                Some("Sphere001".to_owned()),
                Some("rock".to_owned()),
                None,
            ]
        );
        assert!(surface.calls.is_empty());
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn hover_before_load_is_silent() {
        let mut engine =
            ViewerEngine::new(Options::default(), registry(), RecordingPanel::default());
        assert!(!engine.hover_at(CENTER.0, CENTER.1));
        hover(&mut engine, CENTER);
        assert_eq!(engine.hovered(), None);
        assert!(engine.panel().surface().highlights.is_empty());
    }

    #[test]
    fn dragging_does_not_update_hover() {
        let mut engine = engine();
        hover(&mut engine, (5.0, 5.0));
        let _ = engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        hover(&mut engine, CENTER);
        assert_eq!(engine.hovered(), None);
        assert!(engine.panel().surface().highlights.is_empty());
    }

    #[test]
    fn non_finite_easing_still_lands_and_resets() {
        let mut options = Options::default();
        options.focus.focus_easing = EasingFunction::CubicHermite {
            c1: f32::NAN,
            c2: 1.0,
        };
        options.focus.reset_easing = EasingFunction::CubicHermite {
            c1: 2.0,
            c2: 1.0,
        };
        let mut engine = engine_with(options);

        click(&mut engine, CENTER);
        let target = engine.transition_target().unwrap();
        run(&mut engine, 0.3);
        let pose = engine.camera_controller().pose();
        assert!(pose.position.is_finite() && pose.look_at.is_finite());
        settle(&mut engine);
        assert_eq!(engine.camera_controller().pose(), target);

        click(&mut engine, (2.0, 2.0));
        assert_eq!(*engine.focus_state(), FocusState::Overview);
        let home = default_pose().position;
        let mut gap = engine.camera_controller().pose().position.distance(home);
        while engine.is_transitioning() {
            let _ = engine.tick(FRAME);
            let next = engine.camera_controller().pose().position.distance(home);
            // The overshooting curve is clamped, so the return never passes home.
            assert!(next <= gap + 1e-3);
            gap = next;
        }
        assert_eq!(engine.camera_controller().pose(), default_pose());
    }

    #[test]
    fn automatic_framing_and_single_load() {
        let mut engine =
            ViewerEngine::new(Options::default(), registry(), RecordingPanel::default());
        let (scene, root) = demo_scene();
        engine.on_model_loaded(scene, root);

        let pose = engine.default_pose().unwrap();
        let bounds = engine.scene().unwrap().world_bounds(root).unwrap();
        assert_eq!(pose.look_at, Vec3::ZERO);
        assert!(pose
            .position
            .abs_diff_eq(Vec3::Z * bounds.diagonal() * 1.5, 1e-2));
        assert!(engine
            .scene()
            .unwrap()
            .ids()
            .filter(|&id| id != root)
            .all(|id| engine.scene().unwrap().node(id).unwrap().clickable));

        let (other, other_root) = demo_scene();
        engine.on_model_loaded_with_pose(other, other_root, default_pose());
        assert_eq!(engine.default_pose(), Some(pose));
    }
}
