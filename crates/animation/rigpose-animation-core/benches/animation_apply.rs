use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use rigpose_animation_core::{
    read_animation, Animation, Config, RotateTimeline, Skeleton, SkeletonData,
};
use rigpose_skeleton_core::{read_skeleton_data, BoneData};
use rigpose_test_fixtures::{animations, skeletons};

/// A chain of `bones` bones, each rotating through `keys` keyframes.
fn long_chain(bones: usize, keys: usize) -> (Arc<SkeletonData>, Animation) {
    let mut data = SkeletonData::new();
    for i in 0..bones {
        let parent = i.checked_sub(1);
        data.bones.push(BoneData::new(format!("b{i}"), parent));
    }
    let mut anim = Animation::new("chain");
    for bone in 0..bones {
        let mut t = RotateTimeline::new(bone, keys);
        for k in 0..keys {
            t.set_frame(k, k as f32 * 0.1, (k as f32 * 37.0) % 360.0 - 180.0);
            if k % 3 == 1 && k + 1 < keys {
                t.curves_mut().set_curve(k, 0.25, 0.1, 0.25, 1.0);
            }
        }
        anim.push_timeline(t);
    }
    (Arc::new(data), anim)
}

fn apply_benchmark(c: &mut Criterion) {
    let data = Arc::new(
        read_skeleton_data(&skeletons::json("stickman").unwrap(), &Config::default()).unwrap(),
    );
    let walk = read_animation(
        &animations::json("walk").unwrap(),
        "walk",
        &data,
        &Config::default(),
    )
    .unwrap();
    let mut skeleton = Skeleton::new(data);

    c.bench_function("walk_apply", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            walk.apply(&mut skeleton, black_box(time), true);
        })
    });

    let (chain_data, chain) = long_chain(64, 256);
    let mut chain_skeleton = Skeleton::new(chain_data);
    c.bench_function("chain_64x256_mix", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            chain.mix(&mut chain_skeleton, black_box(time), true, 0.5);
        })
    });
}

criterion_group!(benches, apply_benchmark);
criterion_main!(benches);
