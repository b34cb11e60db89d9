//! Echo command implementation
//!
//! Traces seeded random-direction rays from a source around a rectangular
//! room and accumulates a delayed, distance-attenuated impulse response at
//! a listener position. Specular wall bounces only; the result is a toy
//! echo, not a physical room model.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;

use wavecast_trace::rng::{create_rng, derive_stream_seed, random_unit_vector};
use wavecast_trace::{Ray, Room, SPEED_OF_SOUND, Vec2};

use super::render::{render_to_file, Encoding};

/// Arguments for the echo command.
pub struct EchoArgs {
    /// Output WAV path.
    pub out: PathBuf,
    /// Seed for the scatter directions.
    pub seed: u32,
    /// Number of rays scattered from the source.
    pub rays: u32,
    /// Wall bounces traced per ray.
    pub bounces: u32,
    /// Room width in meters.
    pub width: f64,
    /// Room height in meters.
    pub height: f64,
    /// Source position, "x,y".
    pub source: String,
    /// Listener position, "x,y".
    pub listener: String,
    /// Impulse response length in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub rate: u32,
    /// Sample encoding.
    pub encoding: Encoding,
    /// Emit a JSON report.
    pub json: bool,
}

/// Run the echo command.
pub fn run(args: EchoArgs) -> Result<ExitCode> {
    if args.width <= 0.0 || args.height <= 0.0 {
        bail!("room extent must be positive, got {}x{}", args.width, args.height);
    }

    let room = Room::new(args.width, args.height);
    let source = parse_point(&args.source).context("invalid --source")?;
    let listener = parse_point(&args.listener).context("invalid --listener")?;
    if !room.contains(source) {
        bail!(
            "source ({}, {}) lies outside the {}x{} m room",
            source.x,
            source.y,
            args.width,
            args.height
        );
    }
    if !room.contains(listener) {
        bail!(
            "listener ({}, {}) lies outside the {}x{} m room",
            listener.x,
            listener.y,
            args.width,
            args.height
        );
    }

    let response = trace_impulse_response(
        &room,
        source,
        listener,
        args.seed,
        args.rays,
        args.bounces,
        args.duration,
        args.rate,
    );
    let samples: Vec<f32> = response.iter().map(|&v| v as f32).collect();

    let report = render_to_file(&args.out, 1, args.rate, &samples, args.encoding)?;
    report.print(args.json)?;
    Ok(ExitCode::SUCCESS)
}

/// Parses an "x,y" coordinate pair.
fn parse_point(text: &str) -> Result<Vec2> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("expected \"x,y\", got \"{text}\""))?;
    Ok(Vec2::new(
        x.trim().parse().with_context(|| format!("bad x in \"{text}\""))?,
        y.trim().parse().with_context(|| format!("bad y in \"{text}\""))?,
    ))
}

/// Accumulates the normalized mono impulse response at the listener.
///
/// Every ray contributes one arrival per bounce: the path length traced so
/// far plus the straight segment from the bounce point to the listener,
/// attenuated by inverse distance. The direct source-listener path is
/// deposited first.
#[allow(clippy::too_many_arguments)]
fn trace_impulse_response(
    room: &Room,
    source: Vec2,
    listener: Vec2,
    seed: u32,
    rays: u32,
    bounces: u32,
    duration: f64,
    rate: u32,
) -> Vec<f64> {
    let mut response = vec![0.0f64; (duration * rate as f64).round() as usize];

    let mut deposit = |path_len: f64, weight: f64| {
        let delay = path_len / SPEED_OF_SOUND;
        let index = (delay * rate as f64) as usize;
        if index < response.len() {
            // inverse-distance attenuation with a 1 m reference
            response[index] += weight / path_len.max(1.0);
        }
    };

    deposit(source.distance_to(listener), 1.0);

    let mut rng = create_rng(derive_stream_seed(seed, "rays"));
    let ray_weight = 1.0 / rays.max(1) as f64;

    for _ in 0..rays {
        let mut ray = Ray::new(source, random_unit_vector(&mut rng));
        let mut path_len = 0.0;

        for _ in 0..bounces {
            let Some(hit) = room.first_wall_hit(&ray) else {
                break;
            };
            path_len += hit.distance;
            deposit(path_len + hit.point.distance_to(listener), ray_weight);
            ray = ray.reflected(hit.point, hit.normal);
        }
    }

    // Normalize the peak so quantization keeps the reflection tail.
    let peak = response.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    if peak > 0.0 {
        for value in response.iter_mut() {
            *value /= peak;
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_room() -> Room {
        Room::new(8.0, 5.0)
    }

    #[test]
    fn test_parse_point() {
        let p = parse_point("2.5, 1").unwrap();
        assert_eq!(p, Vec2::new(2.5, 1.0));

        assert!(parse_point("2.5").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_impulse_response_is_deterministic_per_seed() {
        let room = test_room();
        let source = Vec2::new(2.0, 2.5);
        let listener = Vec2::new(6.0, 2.5);

        let a = trace_impulse_response(&room, source, listener, 3, 64, 4, 0.25, 44100);
        let b = trace_impulse_response(&room, source, listener, 3, 64, 4, 0.25, 44100);
        assert_eq!(a, b);

        let c = trace_impulse_response(&room, source, listener, 4, 64, 4, 0.25, 44100);
        assert_ne!(a, c);
    }

    #[test]
    fn test_direct_path_arrives() {
        let room = test_room();
        let source = Vec2::new(2.0, 2.5);
        let listener = Vec2::new(6.0, 2.5);

        let response = trace_impulse_response(&room, source, listener, 0, 0, 0, 0.25, 44100);

        // 4 m of travel at 343 m/s lands around sample 514.
        let expected = (4.0 / SPEED_OF_SOUND * 44100.0) as usize;
        assert!(response[expected] > 0.0);
    }

    #[test]
    fn test_response_is_normalized() {
        let room = test_room();
        let source = Vec2::new(2.0, 2.5);
        let listener = Vec2::new(6.0, 2.5);

        let response = trace_impulse_response(&room, source, listener, 9, 128, 4, 0.25, 44100);

        let peak = response.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
        assert!((peak - 1.0).abs() < 1e-12);
        assert!(response.iter().all(|v| v.abs() <= 1.0));
    }
}
