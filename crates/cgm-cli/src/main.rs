//! cgm - 3D transform calculator
//!
//! Builds matrices from transform chains, converts Euler angles and
//! quaternions, and rotates/refracts vectors.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cgm")]
#[command(author, version, about = "3D transform calculator")]
#[command(long_about = "
Build and inspect 4x4 transform matrices, Euler rotations and quaternions.

Ops are written [set:|post:|pre:]KIND:ARGS (default post):
  translate:X,Y,Z   scale:S | scale:X,Y,Z   rotate-x:A  rotate-y:A  rotate-z:A
  rotate-axis:AXIS,A   rotate:A,X,Y,Z   euler:MODE:A,B,C   quat:X,Y,Z,W

Examples:
  cgm matrix --op translate:0,1,-5 --op rotate-y:30 -d
  cgm matrix --op pre:scale:2 --op euler:zyx:10,20,30 -d --invert
  cgm matrix --op rotate:90,0,0,1 --apply 1,0,0
  cgm euler 10 20 30 --mode yxz --degrees
  cgm slerp 0,0,0,1 0,0.7071068,0,0.7071068 --steps 4
  cgm rotate 1,0,0 --axis 0,0,1 --angle 90 --degrees
  cgm refract 0,-1,0 --normal 0,1,0 --ior 0.75
  cgm camera perspective --fov 60 --aspect 1.777 --near 0.1 --far 100
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a matrix from a chain of transforms
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Euler angles to matrix and quaternion
    #[command(visible_alias = "e")]
    Euler(EulerArgs),

    /// Spherical interpolation between two quaternions
    Slerp(SlerpArgs),

    /// Rotate a vector
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Reflect and refract a direction about a surface normal
    Refract(RefractArgs),

    /// Camera and projection matrices
    Camera(CameraArgs),
}

#[derive(Args)]
struct MatrixArgs {
    /// Transform op, applied in the order given (repeatable)
    #[arg(short, long = "op", value_name = "OP")]
    ops: Vec<String>,

    /// Angles are in degrees
    #[arg(short, long)]
    degrees: bool,

    /// Invert the result
    #[arg(short, long)]
    invert: bool,

    /// Transpose the result
    #[arg(short, long)]
    transpose: bool,

    /// Transform this point (X,Y,Z) with the result
    #[arg(short, long, value_name = "X,Y,Z", allow_hyphen_values = true)]
    apply: Option<String>,
}

#[derive(Args)]
struct EulerArgs {
    /// Angle about the first axis
    #[arg(allow_negative_numbers = true)]
    a: f32,

    /// Angle about the second axis
    #[arg(allow_negative_numbers = true)]
    b: f32,

    /// Angle about the third axis
    #[arg(allow_negative_numbers = true)]
    c: f32,

    /// Axis ordering (xyz, zyx, zxz, ...)
    #[arg(short, long, default_value = "xyz")]
    mode: String,

    /// Angles are in degrees
    #[arg(short, long)]
    degrees: bool,
}

#[derive(Args)]
struct SlerpArgs {
    /// Start quaternion X,Y,Z,W
    #[arg(allow_hyphen_values = true)]
    from: String,

    /// End quaternion X,Y,Z,W
    #[arg(allow_hyphen_values = true)]
    to: String,

    /// Interpolation parameter
    #[arg(short, long, default_value = "0.5", conflicts_with = "steps")]
    t: f32,

    /// Print evenly spaced samples from 0 to 1 instead of one value
    #[arg(short, long)]
    steps: Option<u32>,

    /// Use normalized linear interpolation instead
    #[arg(long)]
    nlerp: bool,
}

#[derive(Args)]
struct RotateArgs {
    /// Vector X,Y,Z
    #[arg(allow_hyphen_values = true)]
    vector: String,

    /// Rotation axis X,Y,Z (or x/y/z)
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["quat", "euler"])]
    axis: Option<String>,

    /// Rotation angle (with --axis)
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    angle: f32,

    /// Rotation quaternion X,Y,Z,W
    #[arg(long, allow_hyphen_values = true, conflicts_with = "euler")]
    quat: Option<String>,

    /// Euler rotation MODE:A,B,C
    #[arg(long, allow_hyphen_values = true)]
    euler: Option<String>,

    /// Angles are in degrees
    #[arg(short, long)]
    degrees: bool,
}

#[derive(Args)]
struct RefractArgs {
    /// Incident direction X,Y,Z
    #[arg(allow_hyphen_values = true)]
    incident: String,

    /// Surface normal X,Y,Z
    #[arg(short, long, allow_hyphen_values = true)]
    normal: String,

    /// Ratio of indices of refraction (from / to)
    #[arg(short, long, default_value = "1.0")]
    ior: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum CameraKind {
    /// Camera-to-world and view matrices
    LookAt,
    /// Perspective projection from field of view
    Perspective,
    /// Perspective projection from view volume
    Frustum,
    /// Orthographic projection
    Ortho,
}

#[derive(Args)]
struct CameraArgs {
    /// Matrix kind
    #[arg(value_enum)]
    kind: CameraKind,

    /// Eye position X,Y,Z (look-at)
    #[arg(long, default_value = "0,0,1", allow_hyphen_values = true)]
    eye: String,

    /// Target position X,Y,Z (look-at)
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    target: String,

    /// Up vector X,Y,Z (look-at)
    #[arg(long, default_value = "0,1,0", allow_hyphen_values = true)]
    up: String,

    /// Vertical field of view in degrees (perspective)
    #[arg(long, default_value = "60")]
    fov: f32,

    /// Width / height (perspective)
    #[arg(long, default_value = "1.0")]
    aspect: f32,

    /// View volume LEFT,RIGHT,BOTTOM,TOP (frustum, ortho)
    #[arg(long, default_value = "-1,1,-1,1", allow_hyphen_values = true)]
    bounds: String,

    /// Near plane distance
    #[arg(long, default_value = "0.1")]
    near: f32,

    /// Far plane distance
    #[arg(long, default_value = "100")]
    far: f32,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Matrix(args) => commands::matrix::run(args, cli.json),
        Commands::Euler(args) => commands::euler::run(args, cli.json),
        Commands::Slerp(args) => commands::slerp::run(args, cli.json),
        Commands::Rotate(args) => commands::rotate::run(args, cli.json),
        Commands::Refract(args) => commands::refract::run(args, cli.json),
        Commands::Camera(args) => commands::camera::run(args, cli.json),
    }
}
