//! Interactive demo: drive a gradient presenter from stdin.
//!
//! Type `linear` or `radial` to switch builders, or a widget event like
//! `from-x:10`, `to-direction:bottom-right`, `stop-percent:0:45`. Every
//! accepted event rebuilds the syntax and "applies" it by printing the style
//! string a GUI host would set on its preview shapes.

use std::io::{self, BufRead};

use gradix::{
    syntax, GradientKind, LinearMsg, LinearPresenter, RadialMsg, RadialPresenter, StyleSink,
};

struct PreviewShapes;

impl StyleSink for PreviewShapes {
    fn apply_style(&mut self, style: &str) {
        println!("{}{}", syntax::BACKGROUND_PROP, style);
    }
}

fn main() {
    env_logger::init();

    let mut kind = GradientKind::Linear;
    let mut linear = LinearPresenter::new(PreviewShapes);
    let mut radial = RadialPresenter::new(PreviewShapes);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("stdin error: {}", err);
                break;
            }
        };
        let event = line.trim();
        if event.is_empty() {
            continue;
        }

        if let Ok(next) = event.parse::<GradientKind>() {
            kind = next;
            // Switching re-applies the now-visible builder's output.
            match kind {
                GradientKind::Linear => println!("{}{}", syntax::BACKGROUND_PROP, linear.syntax()),
                GradientKind::Radial => println!("{}{}", syntax::BACKGROUND_PROP, radial.syntax()),
            }
            continue;
        }

        match kind {
            GradientKind::Linear => match event.parse::<LinearMsg>() {
                Ok(msg) => linear.update(msg),
                Err(()) => log::warn!("unhandled linear event: {}", event),
            },
            GradientKind::Radial => match event.parse::<RadialMsg>() {
                Ok(msg) => radial.update(msg),
                Err(()) => log::warn!("unhandled radial event: {}", event),
            },
        }
    }
}
