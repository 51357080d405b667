//! Slerp command - quaternion interpolation

use crate::SlerpArgs;
use anyhow::{Result, bail};
use cgm_math::Quat;
use serde_json::json;
use tracing::{debug, warn};

pub fn run(args: SlerpArgs, json: bool) -> Result<()> {
    let q0 = super::parse_quat(&args.from)?;
    let q1 = super::parse_quat(&args.to)?;
    for (name, q) in [("from", q0), ("to", q1)] {
        if (q.length() - 1.0).abs() > 1e-3 {
            warn!("{} quaternion is not unit length ({:.6})", name, q.length());
        }
    }
    debug!(dot = q0.dot(q1), "endpoints");

    let ts: Vec<f32> = match args.steps {
        Some(0) => bail!("--steps must be at least 1"),
        Some(n) => (0..=n).map(|i| i as f32 / n as f32).collect(),
        None => vec![args.t],
    };

    let samples: Vec<(f32, Quat)> = ts.into_iter().map(|t| (t, interpolate(q0, q1, t, args.nlerp))).collect();

    if json {
        let doc: Vec<_> = samples.iter().map(|(t, q)| json!({ "t": t, "quat": q.to_array() })).collect();
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (t, q) in samples {
        println!("t = {:<8.4} [{} ]", t, super::fmt_components(&q.to_array()));
    }
    Ok(())
}

fn interpolate(q0: Quat, q1: Quat, t: f32, nlerp: bool) -> Quat {
    if nlerp {
        // Same hemisphere as slerp
        let q1 = if q0.dot(q1) < 0.0 { -q1 } else { q1 };
        q0.lerp(q1, t).normalize()
    } else {
        q0.slerp(q1, t)
    }
}
