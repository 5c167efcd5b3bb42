#![allow(unused)]

use rosu_sunny::model::RawNote;

/// A 4K chart with `n` single notes cycling through the columns.
pub fn stream(n: u32, spacing: f64) -> Vec<RawNote> {
    (0..n)
        .map(|i| RawNote::tap(i as usize % 4, 1000.0 + f64::from(i) * spacing))
        .collect()
}

/// A 4K chart that mixes chords, jacks, and hold notes.
pub fn mixed(n: u32, spacing: f64) -> Vec<RawNote> {
    (0..n)
        .flat_map(|i| {
            let time = 500.0 + f64::from(i) * spacing;
            let column = (i as usize * 3) % 4;

            let first = if i % 5 == 0 {
                RawNote::hold(column, time, time + 4.0 * spacing)
            } else {
                RawNote::tap(column, time)
            };

            let second = (i % 3 == 0).then(|| RawNote::tap((column + 2) % 4, time));

            std::iter::once(first).chain(second)
        })
        .collect()
}

pub const OSU_FILE: &str = "osu file format v14

[General]
AudioFilename: audio.mp3
Mode: 3

[Metadata]
Title:stream
Version:4K

[Difficulty]
HPDrainRate:8
CircleSize:4
OverallDifficulty:8
ApproachRate:5
SliderMultiplier:1.4
SliderTickRate:1

[TimingPoints]
0,250,4,2,0,100,1,0

[HitObjects]
64,192,1000,1,0,0:0:0:0:
192,192,1125,1,0,0:0:0:0:
320,192,1250,1,0,0:0:0:0:
448,192,1375,1,0,0:0:0:0:
64,192,1500,128,0,2000:0:0:0:0:
192,192,1625,1,0,0:0:0:0:
320,192,1750,1,0,0:0:0:0:
448,192,1875,1,0,0:0:0:0:
192,192,2000,1,0,0:0:0:0:
320,192,2125,128,0,2500:0:0:0:0:
448,192,2250,1,0,0:0:0:0:
64,192,2375,1,0,0:0:0:0:
";

pub const OSU_STANDARD_FILE: &str = "osu file format v14

[General]
Mode: 0

[Difficulty]
HPDrainRate:5
CircleSize:4
OverallDifficulty:8
ApproachRate:9
SliderMultiplier:1.4
SliderTickRate:1

[TimingPoints]
0,250,4,2,0,100,1,0

[HitObjects]
256,192,1000,1,0,0:0:0:0:
";
