use std::io::Write;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use carousel_core::{ControlState, FixedChild, FixedSurface, Slider, SliderOptions};

/// Headless run over a fixed layout
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Leading edge of each slide
    #[arg(long, value_delimiter = ',', default_values_t = [0.0, 100.0, 220.0, 340.0])]
    pub slides: Vec<f64>,
    /// Width of each slide (defaults to the distance to the next slide)
    #[arg(long, value_delimiter = ',')]
    pub widths: Option<Vec<f64>>,
    /// Total scrollable width of the track
    #[arg(long)]
    pub total: Option<f64>,
    /// Visible width of the viewport
    #[arg(long, default_value_t = 150.0)]
    pub viewport: f64,
    /// Never animate repositions
    #[arg(long)]
    pub reduced_motion: bool,
    /// Operations to run in order: next, prev, goto:N, resize:W, apply:X
    pub steps: Vec<String>,
}

/// One scripted operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    GoTo(usize),
    Resize(f64),
    Apply(f64),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let step = match (name.to_lowercase().as_str(), arg) {
            ("next", None) => Step::Next,
            ("prev", None) => Step::Prev,
            ("goto", Some(arg)) => Step::GoTo(arg.parse()?),
            ("resize", Some(arg)) => Step::Resize(parse_width(arg)?),
            ("apply", Some(arg)) => Step::Apply(arg.parse()?),
            _ => bail!("unknown step '{}'", s),
        };
        Ok(step)
    }
}

fn parse_width(arg: &str) -> Result<f64> {
    let width: f64 = arg.parse()?;
    if !width.is_finite() || width < 0.0 {
        return Err(anyhow!("width must be a non-negative number, got '{}'", arg));
    }
    Ok(width)
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    step: &'a str,
    #[serde(flatten)]
    controls: ControlState,
    offset: f64,
    max_offset: f64,
    viewport: f64,
}

impl SimulateArgs {
    fn surface(&self) -> Result<FixedSurface> {
        let surface = match &self.widths {
            Some(widths) => {
                if widths.len() != self.slides.len() {
                    bail!(
                        "--widths has {} entries but --slides has {}",
                        widths.len(),
                        self.slides.len()
                    );
                }
                let children: Vec<FixedChild> = self
                    .slides
                    .iter()
                    .zip(widths)
                    .map(|(&offset, &width)| FixedChild::card(offset, width))
                    .collect();
                let total = self.total.unwrap_or_else(|| {
                    children
                        .iter()
                        .map(|c| c.offset + c.width)
                        .fold(0.0, f64::max)
                });
                FixedSurface::from_children(children, total, self.viewport)
            }
            None => {
                let total = self
                    .total
                    .unwrap_or_else(|| self.slides.last().copied().unwrap_or(0.0));
                FixedSurface::from_offsets(&self.slides, total, self.viewport)
            }
        };
        Ok(surface.with_reduced_motion(self.reduced_motion))
    }
}

/// Run the script, writing one JSON line per step to `out`
pub fn execute(args: &SimulateArgs, options: SliderOptions, out: &mut impl Write) -> Result<()> {
    let steps = args
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut slider = Slider::mount(args.surface()?, options);
    slider.on_frame();
    report(&slider, "mount", out)?;

    // Virtual clock: each resize waits out exactly one quiet window
    let mut clock = Instant::now();
    for (raw, step) in args.steps.iter().zip(steps) {
        debug!(?step, "simulate step");
        match step {
            Step::Next => slider.next(),
            Step::Prev => slider.prev(),
            Step::GoTo(index) => slider.go_to_index(index, true),
            Step::Apply(offset) => slider.apply(offset, true),
            Step::Resize(width) => {
                slider.surface_mut().set_viewport_width(width);
                slider.notify_resize(clock);
                clock += options.resize_debounce;
                slider.poll_resize(clock);
            }
        }
        report(&slider, raw.trim(), out)?;
    }
    Ok(())
}

fn report(slider: &Slider<FixedSurface>, step: &str, out: &mut impl Write) -> Result<()> {
    let (offset, max_offset) = slider
        .state()
        .map(|s| (s.current_offset(), s.max_offset()))
        .unwrap_or((0.0, 0.0));
    let line = Report {
        step,
        controls: slider.controls(),
        offset,
        max_offset,
        viewport: slider.surface().viewport_width.unwrap_or(0.0),
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    Ok(())
}
