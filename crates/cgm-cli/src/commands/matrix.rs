//! Matrix command - build a matrix from a transform chain

use crate::MatrixArgs;
use anyhow::{Context, Result};
use cgm_math::Mat4;
use serde_json::json;
use tracing::{debug, info, trace};

pub fn run(args: MatrixArgs, json: bool) -> Result<()> {
    let m = build(&args)?;
    let det = m.determinant();

    let point = match &args.apply {
        Some(p) => {
            let p = super::parse_vec3(p)?;
            let out = p.transform(&m);
            debug!(?p, ?out, "transformed point");
            Some((p, out))
        }
        None => None,
    };

    if json {
        let mut doc = json!({
            "rows": super::matrix_rows(&m),
            "cols": m.to_cols_array(),
            "determinant": det,
        });
        if let Some((_, out)) = point {
            doc["point"] = json!(out.to_array());
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Matrix:");
    super::print_matrix(&m);
    println!("Determinant: {:.6}", det);
    if let Some((p, out)) = point {
        println!(
            "Point: [{} ] -> [{} ]",
            super::fmt_components(&p.to_array()),
            super::fmt_components(&out.to_array())
        );
    }
    Ok(())
}

fn build(args: &MatrixArgs) -> Result<Mat4> {
    let mut m = Mat4::IDENTITY;
    for op in &args.ops {
        let (mode, t) = super::parse_op(op, args.degrees)?;
        trace!(op = %op, ?mode, kind = t.kind(), "applying");
        m.apply(mode, t);
    }
    info!(ops = args.ops.len(), "built matrix");

    if args.invert {
        m.invert().context("Cannot invert matrix")?;
        debug!("inverted");
    }
    if args.transpose {
        m = m.transpose();
        debug!("transposed");
    }
    Ok(m)
}
