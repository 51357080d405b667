//! CLI command implementations

pub mod camera;
pub mod euler;
pub mod matrix;
pub mod refract;
pub mod rotate;
pub mod slerp;

use anyhow::{Context, Result, bail};
use cgm_math::{Compose, EulerMode, Mat4, Quat, Transform, Vec3};

/// Parse a comma separated list of floats
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{}'", p.trim(), s))
        })
        .collect()
}

fn parse_n<const N: usize>(s: &str, what: &str) -> Result<[f32; N]> {
    let v = parse_floats(s)?;
    match <[f32; N]>::try_from(v.as_slice()) {
        Ok(a) => Ok(a),
        Err(_) => bail!("{} needs {} components, got {}: '{}'", what, N, v.len(), s),
    }
}

/// Parse "X,Y,Z"
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    parse_n::<3>(s, "vector").map(Vec3::from_array)
}

/// Parse "X,Y,Z,W"
pub fn parse_quat(s: &str) -> Result<Quat> {
    let [x, y, z, w] = parse_n::<4>(s, "quaternion")?;
    Ok(Quat::new(x, y, z, w))
}

/// Parse "MODE:A,B,C" into an ordering and three angles (radians)
pub fn parse_euler(s: &str, degrees: bool) -> Result<(EulerMode, [f32; 3])> {
    let (mode, angles) = s
        .split_once(':')
        .with_context(|| format!("Euler rotation must be MODE:A,B,C, got '{}'", s))?;
    let mode: EulerMode = mode.parse()?;
    let angles = parse_n::<3>(angles, "Euler rotation")?.map(|a| to_radians(a, degrees));
    Ok((mode, angles))
}

/// Convert an angle to radians when `degrees` is set
#[inline]
pub fn to_radians(a: f32, degrees: bool) -> f32 {
    if degrees { a.to_radians() } else { a }
}

/// Parse one transform op: `[set:|post:|pre:]KIND:ARGS`
pub fn parse_op(s: &str, degrees: bool) -> Result<(Compose, Transform)> {
    let (mode, rest) = match s.split_once(':') {
        Some(("set", r)) => (Compose::Set, r),
        Some(("post", r)) => (Compose::Post, r),
        Some(("pre", r)) => (Compose::Pre, r),
        _ => (Compose::Post, s),
    };
    let (kind, args) = rest
        .split_once(':')
        .with_context(|| format!("Op must be KIND:ARGS, got '{}'", s))?;
    let angle = |a: &str| -> Result<f32> {
        let [v] = parse_n::<1>(a, "angle")?;
        Ok(to_radians(v, degrees))
    };

    let t = match kind {
        "translate" | "t" => Transform::Translate(parse_vec3(args)?),
        "scale" | "s" => match parse_floats(args)?.as_slice() {
            [u] => Transform::Scale(Vec3::splat(*u)),
            [x, y, z] => Transform::Scale(Vec3::new(*x, *y, *z)),
            other => bail!("scale needs 1 or 3 components, got {}", other.len()),
        },
        "rotate-x" | "rx" => Transform::RotateX(angle(args)?),
        "rotate-y" | "ry" => Transform::RotateY(angle(args)?),
        "rotate-z" | "rz" => Transform::RotateZ(angle(args)?),
        "rotate-axis" | "ra" => {
            let (axis, a) = args
                .split_once(',')
                .with_context(|| format!("rotate-axis needs AXIS,ANGLE, got '{}'", args))?;
            Transform::RotateAxis { axis: axis.trim().parse()?, angle: angle(a)? }
        }
        "rotate" | "r" => {
            let [a, x, y, z] = parse_n::<4>(args, "rotate")?;
            Transform::Rotate { angle: to_radians(a, degrees), axis: Vec3::new(x, y, z) }
        }
        "euler" | "e" => {
            let (mode, angles) = parse_euler(args, degrees)?;
            Transform::Euler { angles, mode }
        }
        "quat" | "q" => Transform::Quat(parse_quat(args)?),
        other => bail!("Unknown transform '{}'", other),
    };
    Ok((mode, t))
}

/// Format a vector's components
pub fn fmt_components(v: &[f32]) -> String {
    v.iter().map(|x| format!("{:>10.6}", x)).collect::<Vec<_>>().join(" ")
}

/// Print a matrix row by row
pub fn print_matrix(m: &Mat4) {
    for r in 0..4 {
        println!("  [{} ]", fmt_components(&m.row(r).to_array()));
    }
}

/// Rows as nested arrays, for JSON output
pub fn matrix_rows(m: &Mat4) -> [[f32; 4]; 4] {
    [0, 1, 2, 3].map(|r| m.row(r).to_array())
}
