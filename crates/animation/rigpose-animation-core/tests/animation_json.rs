use std::sync::Arc;

use rigpose_animation_core::{
    read_animation, AnimationError, Config, Skeleton, SkeletonData, Target, Timeline,
};
use rigpose_skeleton_core::read_skeleton_data;
use rigpose_test_fixtures::{animations, skeletons};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn stickman() -> Arc<SkeletonData> {
    let json = skeletons::json("stickman").expect("stickman fixture");
    Arc::new(read_skeleton_data(&json, &Config::default()).expect("stickman parses"))
}

fn load(name: &str, data: &SkeletonData) -> rigpose_animation_core::Animation {
    let json = animations::json(name).expect("animation fixture");
    read_animation(&json, name, data, &Config::default()).expect("animation parses")
}

fn eyes(skeleton: &Skeleton) -> Option<String> {
    skeleton
        .find_slot("eyes")
        .and_then(|s| s.attachment())
        .map(|a| a.name.clone())
}

#[test]
fn walk_keeps_document_order_and_reads_slots() {
    let data = stickman();
    let walk = load("walk", &data);
    assert_eq!(walk.name(), "walk");
    assert_eq!(walk.duration(), 1.0);
    let kinds: Vec<_> = walk.timelines().iter().map(Timeline::type_name).collect();
    assert_eq!(
        kinds,
        ["translate", "rotate", "rotate", "scale", "color", "attachment"]
    );
    let targets: Vec<_> = walk.timelines().iter().map(Timeline::target).collect();
    let bone = |n: &str| Target::Bone(data.find_bone_index(n).unwrap());
    let slot = |n: &str| Target::Slot(data.find_slot_index(n).unwrap());
    assert_eq!(
        targets,
        [
            bone("hip"),
            bone("torso"),
            bone("head"),
            bone("forearm"),
            slot("head"),
            slot("eyes")
        ]
    );
}

#[test]
fn walk_poses_the_stickman_at_mid_cycle() {
    let data = stickman();
    let walk = load("walk", &data);
    let mut skeleton = Skeleton::new(data);
    walk.apply(&mut skeleton, 0.5, true);

    let hip = skeleton.find_bone("hip").unwrap();
    assert!(approx(hip.y, 56.0, 1e-4));
    assert!(approx(skeleton.find_bone("torso").unwrap().rotation, 95.0, 1e-4));
    assert!(approx(skeleton.find_bone("head").unwrap().rotation, 8.0, 1e-4));
    let forearm = skeleton.find_bone("forearm").unwrap();
    assert!(approx(forearm.scale_x, 1.1, 1e-4));
    assert!(approx(forearm.scale_y, 0.7, 1e-4));

    let head = skeleton.find_slot("head").unwrap().color;
    assert!(approx(head.r, 1.0, 1e-4));
    assert!(approx(head.g, 176.0 / 255.0, 1e-4));
    assert!(approx(head.b, 160.0 / 255.0, 1e-4));
    assert_eq!(eyes(&skeleton).as_deref(), Some("eyes-open"));
}

#[test]
fn walk_stepped_head_and_blinking_eyes() {
    let data = stickman();
    let walk = load("walk", &data);
    let mut skeleton = Skeleton::new(data);

    walk.apply(&mut skeleton, 0.1, false);
    assert_eq!(eyes(&skeleton).as_deref(), Some("eyes-open"));

    walk.apply(&mut skeleton, 0.49, false);
    assert!(approx(skeleton.find_bone("head").unwrap().rotation, 0.0, 1e-4));

    walk.apply(&mut skeleton, 0.27, false);
    assert_eq!(eyes(&skeleton).as_deref(), Some("eyes-closed"));

    walk.apply(&mut skeleton, 0.95, false);
    assert_eq!(eyes(&skeleton), None);

    // Looping back into the cycle restores them.
    walk.apply(&mut skeleton, 1.5, true);
    assert_eq!(eyes(&skeleton).as_deref(), Some("eyes-open"));
}

#[test]
fn eased_segment_matches_linear_at_midpoint() {
    let data = stickman();
    let walk = load("walk", &data);
    let mut skeleton = Skeleton::new(data);
    // Second hip segment is a symmetric ease-in-out.
    walk.apply(&mut skeleton, 0.75, false);
    assert!(approx(skeleton.find_bone("hip").unwrap().y, 58.0, 1e-2));
    walk.apply(&mut skeleton, 0.6, false);
    let eased = skeleton.find_bone("hip").unwrap().y;
    // Linear would give 56.8; the ease-in stays closer to the low key.
    assert!(eased < 56.8, "eased={eased}");
}

#[test]
fn wave_translation_is_scaled_by_config() {
    let data = stickman();
    let json = animations::json("wave").unwrap();
    let wave = read_animation(&json, "wave", &data, &Config::with_scale(2.0)).unwrap();
    assert_eq!(wave.duration(), 2.0);
    match &wave.timelines()[1] {
        Timeline::Translate(t) => {
            let last = t.frame(1);
            assert_eq!((last.time, last.x, last.y), (2.0, 8.0, 4.0));
        }
        other => panic!("expected translate, got {}", other.type_name()),
    }
    match &wave.timelines()[0] {
        Timeline::Rotate(t) => assert_eq!(t.frame(1).angle, 150.0),
        other => panic!("expected rotate, got {}", other.type_name()),
    }
}

#[test]
fn reports_descriptor_errors() {
    let data = stickman();
    let cfg = Config::default();
    let read = |json: &str| read_animation(json, "broken", &data, &cfg).unwrap_err();

    assert!(matches!(
        read(r#"{ "bones": { "tail": { "rotate": [ { "time": 0, "angle": 1 } ] } } }"#),
        AnimationError::BoneNotFound(name) if name == "tail"
    ));
    assert!(matches!(
        read(r#"{ "slots": { "hat": { "color": [ { "time": 0, "color": "ffffffff" } ] } } }"#),
        AnimationError::SlotNotFound(name) if name == "hat"
    ));
    assert!(matches!(
        read(r#"{ "bones": { "hip": { "shear": [ { "time": 0 } ] } } }"#),
        AnimationError::InvalidBoneTimeline(kind) if kind == "shear"
    ));
    assert!(matches!(
        read(r#"{ "slots": { "eyes": { "rotate": [ { "time": 0 } ] } } }"#),
        AnimationError::InvalidSlotTimeline(kind) if kind == "rotate"
    ));
    assert!(matches!(
        read(r#"{ "bones": { "hip": { "translate": [] } } }"#),
        AnimationError::EmptyTimeline { .. }
    ));
    assert!(matches!(
        read(r#"{ "slots": { "head": { "color": [ { "time": 0, "color": "red" } ] } } }"#),
        AnimationError::Skeleton(_)
    ));
    assert!(matches!(
        read(r#"{ "bones": { "hip": { "rotate": [ { "time": 1 }, { "time": 0 } ] } } }"#),
        AnimationError::NonMonotonicTime { frame: 1, .. }
    ));
    assert!(matches!(read("{ not json"), AnimationError::Parse(_)));
}

#[test]
fn curve_on_last_frame_is_ignored() {
    let data = stickman();
    let json = r#"{ "bones": { "hip": { "rotate": [
        { "time": 0, "angle": 0 },
        { "time": 1, "angle": 10, "curve": "stepped" }
    ] } } }"#;
    let anim = read_animation(json, "tail-curve", &data, &Config::default()).unwrap();
    let mut skeleton = Skeleton::new(data);
    anim.apply(&mut skeleton, 0.5, false);
    assert!(approx(skeleton.find_bone("hip").unwrap().rotation, 5.0, 1e-4));
}
