//! Star Nom entry point
//!
//! Native builds have no window; this runs a headless session at the real tick
//! rate, throws the guy around on a script and logs what happens.
//!
//! Usage: `star-nom [seed] [ticks]`

use std::str::FromStr;
use std::time::{Duration, Instant};

use glam::Vec2;
use star_nom::StarNom;
use star_nom::consts::TICK_MILLIS;
use star_nom::input::PointerEvent;
use star_nom::renderer::MonospaceMetrics;

/// Ticks between scripted throws
const THROW_EVERY: u64 = 120;
/// Ticks the scripted drag is held before release
const THROW_HOLD: u64 = 3;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = parse_arg(args.next(), "seed", 0x5EED);
    let ticks: u64 = parse_arg(args.next(), "ticks", 1000);

    log::info!("Star Nom (native, headless) starting: seed {seed}, {ticks} ticks");

    let mut game = StarNom::new(seed);
    let metrics = MonospaceMetrics::default();
    game.start();

    let period = Duration::from_millis(TICK_MILLIS);
    let mut next = Instant::now();

    for t in 0..ticks {
        script_throw(&mut game, t);

        let report = game.update();
        let commands = game.render(&metrics);

        if let Some(vel) = report.launch {
            log::info!("Tick {t}: thrown at ({:.1}, {:.1})", vel.x, vel.y);
        }
        if report.stars_eaten > 0 {
            log::info!(
                "Tick {t}: nom x{} (+{}), score {}",
                report.stars_eaten,
                report.points_gained,
                game.score()
            );
        }
        log::trace!("Tick {t}: {} draw commands", commands.len());

        next += period;
        std::thread::sleep(next.saturating_duration_since(Instant::now()));
    }

    game.stop();
    println!("Final score: {}", game.score());
}

/// Grab the guy and fling him up and across, alternating sides
fn script_throw(game: &mut StarNom, t: u64) {
    let phase = t % THROW_EVERY;
    if t < THROW_EVERY || phase > THROW_HOLD {
        return;
    }
    let grab = game.guy_position();
    if phase == 0 {
        game.push_event(PointerEvent::Press(grab));
        game.push_event(PointerEvent::Drag(grab));
    } else if phase == THROW_HOLD {
        let dir = if (t / THROW_EVERY) % 2 == 0 { 1.0 } else { -1.0 };
        game.push_event(PointerEvent::Release(grab + Vec2::new(dir * 60.0, -150.0)));
    }
}

fn parse_arg<T: FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {name} {raw:?}");
            default
        }),
        None => default,
    }
}
