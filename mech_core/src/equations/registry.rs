//! # Equation Registry
//!
//! Central registry of every formula implemented in mech_core. Each equation
//! carries metadata: plain-text formula, variable definitions, source
//! reference, assumptions, and the function that implements it.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for documentation and audit trails
//! - Usage tracking so a calculation can report which formulas it applied
//!
//! ## Usage
//!
//! ```rust
//! use mech_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::VonMisesStress, "Shaft shoulder");
//!
//! let meta = Equation::VonMisesStress.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// References
// ============================================================================

/// Textbook or handbook a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Shigley's Mechanical Engineering Design
    Shigley { edition: u8, section: &'static str },
    /// Hibbeler, Engineering Mechanics (Statics or Dynamics volume)
    Hibbeler {
        edition: u8,
        volume: &'static str,
        section: &'static str,
    },
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Shigley { edition, section } => {
                format!("Shigley {}ed, Section {}", edition, section)
            }
            CodeReference::Hibbeler { edition, volume, section } => {
                format!("Hibbeler {} {}ed, Section {}", volume, edition, section)
            }
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Shigley { .. } => "Shigley",
            CodeReference::Hibbeler { .. } => "Hibbeler",
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Discipline an equation belongs to, used to group the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Equivalent stress / yield criteria
    Stress,
    /// Force composition
    Statics,
    /// Particle motion
    Kinematics,
    /// Thermal strain
    Thermal,
    /// Shaft speed, angle, and power
    Rotation,
    /// Beam deflection
    Beams,
    /// Springs and oscillators
    Vibration,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Stress => "Stress",
            EquationCategory::Statics => "Statics",
            EquationCategory::Kinematics => "Kinematics",
            EquationCategory::Thermal => "Thermal",
            EquationCategory::Rotation => "Rotation",
            EquationCategory::Beams => "Beams",
            EquationCategory::Vibration => "Vibration",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Statics => 1,
            EquationCategory::Stress => 2,
            EquationCategory::Thermal => 3,
            EquationCategory::Beams => 4,
            EquationCategory::Kinematics => 5,
            EquationCategory::Rotation => 6,
            EquationCategory::Vibration => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "σ1", "L", "ωn")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units (e.g., "Pa", "m", "rad/s")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Von Mises Stress")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas implemented in mech_core.
///
/// Serializes in snake_case, matching the implementing function's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Equation {
    /// σ_vm = √(σ1² − σ1σ2 + σ2²)
    VonMisesStress,
    /// x = v0 cosθ t, y = v0 sinθ t − ½gt²
    ProjectileTrajectory,
    /// |F| = √(Fx² + Fy²), θ = atan2(Fy, Fx)
    ForceResultant,
    /// ΔL = L0 α ΔT
    ThermalExpansion,
    /// ω = 2πn/60, θ = ω·5
    AngularVelocityConversion,
    /// y = −Px²(3L − x)/(6EI)
    BeamDeflection,
    /// vx = v cosθ, vy = v sinθ
    VelocityComponents,
    /// T = P/ω
    PowerToTorque,
    /// F = −kx, U = ½kx²
    SpringSystem,
    /// x = x0 e^(−ζωn t) cos(ωn t)
    DampedOscillation,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VonMisesStress => EquationMetadata {
                name: "Von Mises Stress",
                description: "Equivalent stress for a plane-stress state from its two principal stresses",
                formula_plain: "sigma_vm = sqrt(sigma1^2 - sigma1*sigma2 + sigma2^2)",
                reference: CodeReference::Shigley { edition: 11, section: "5-5" },
                variables: vec![
                    Variable::new("σ1", "First principal stress", "Pa"),
                    Variable::new("σ2", "Second principal stress", "Pa"),
                    Variable::new("σ_vm", "Von Mises equivalent stress", "Pa"),
                ],
                assumptions: vec!["Plane stress (σ3 = 0)", "Ductile isotropic material"],
                category: EquationCategory::Stress,
                source_module: "equations/stress.rs",
                source_function: "von_mises_stress",
            },

            Equation::ProjectileTrajectory => EquationMetadata {
                name: "Projectile Trajectory",
                description: "Horizontal and vertical displacement of a projectile for each launch angle and time",
                formula_plain: "x = v0*cos(theta)*t, y = v0*sin(theta)*t - g*t^2/2",
                reference: CodeReference::Hibbeler { edition: 14, volume: "Dynamics", section: "12.6" },
                variables: vec![
                    Variable::new("v0", "Launch speed", "m/s"),
                    Variable::new("θ", "Launch angle", "deg"),
                    Variable::new("t", "Time since launch", "s"),
                    Variable::new("g", "Gravitational acceleration (9.81)", "m/s^2"),
                ],
                assumptions: vec!["No air resistance", "Uniform gravity field", "Launch from the origin"],
                category: EquationCategory::Kinematics,
                source_module: "equations/kinematics.rs",
                source_function: "projectile_trajectory",
            },

            Equation::ForceResultant => EquationMetadata {
                name: "Force Resultant",
                description: "Magnitude and direction of the resultant of two orthogonal force components",
                formula_plain: "|F| = sqrt(Fx^2 + Fy^2), theta = atan2(Fy, Fx)",
                reference: CodeReference::Hibbeler { edition: 14, volume: "Statics", section: "2.4" },
                variables: vec![
                    Variable::new("Fx", "Force component along x", "N"),
                    Variable::new("Fy", "Force component along y", "N"),
                    Variable::new("θ", "Direction from +x, in (-180, 180]", "deg"),
                ],
                assumptions: vec!["Concurrent coplanar forces"],
                category: EquationCategory::Statics,
                source_module: "equations/statics.rs",
                source_function: "force_resultant",
            },

            Equation::ThermalExpansion => EquationMetadata {
                name: "Linear Thermal Expansion",
                description: "Free change in length of a member subjected to a temperature change",
                formula_plain: "dL = L0 * alpha * dT, Lf = L0 + dL",
                reference: CodeReference::Hibbeler { edition: 10, volume: "Mechanics of Materials", section: "4.6" },
                variables: vec![
                    Variable::new("L0", "Original length", "m"),
                    Variable::new("α", "Coefficient of thermal expansion", "1/K"),
                    Variable::new("ΔT", "Temperature change", "K"),
                ],
                assumptions: vec!["Unrestrained member", "α constant over the temperature range"],
                category: EquationCategory::Thermal,
                source_module: "equations/thermal.rs",
                source_function: "thermal_expansion",
            },

            Equation::AngularVelocityConversion => EquationMetadata {
                name: "Angular Velocity Conversion",
                description: "Angular velocity from shaft speed and angle swept over a 5 s window",
                formula_plain: "omega = rpm * 2*pi / 60, theta = omega * 5",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Shaft speed", "rpm"),
                    Variable::new("ω", "Angular velocity", "rad/s"),
                    Variable::new("θ", "Angle swept in 5 s", "rad"),
                ],
                assumptions: vec!["Constant angular velocity"],
                category: EquationCategory::Rotation,
                source_module: "equations/rotation.rs",
                source_function: "angular_velocity_conversion",
            },

            Equation::BeamDeflection => EquationMetadata {
                name: "Cantilever End-Load Deflection",
                description: "Deflection along a cantilever with a concentrated load at its free end",
                formula_plain: "y = -(P*x^2 / (6EI)) * (3L - x)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Tip load", "N"),
                    Variable::new("L", "Beam length", "m"),
                    Variable::new("x", "Position from the fixed end", "m"),
                    Variable::new("E", "Modulus of elasticity", "Pa"),
                    Variable::new("I", "Second moment of area", "m^4"),
                ],
                assumptions: vec!["Linear elastic material", "Small deflections", "Prismatic member"],
                category: EquationCategory::Beams,
                source_module: "equations/beam.rs",
                source_function: "beam_deflection",
            },

            Equation::VelocityComponents => EquationMetadata {
                name: "Velocity Components",
                description: "Cartesian components of a velocity from speed and heading angle",
                formula_plain: "vx = v*cos(theta), vy = v*sin(theta)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("v", "Speed", "m/s"),
                    Variable::new("θ", "Heading from +x", "deg"),
                ],
                assumptions: vec!["Planar motion"],
                category: EquationCategory::Kinematics,
                source_module: "equations/kinematics.rs",
                source_function: "velocity_components",
            },

            Equation::PowerToTorque => EquationMetadata {
                name: "Power to Torque",
                description: "Shaft torque transmitted at a given power and angular velocity",
                formula_plain: "T = P / omega",
                reference: CodeReference::Shigley { edition: 11, section: "3-17" },
                variables: vec![
                    Variable::new("P", "Power", "W"),
                    Variable::new("ω", "Angular velocity", "rad/s"),
                    Variable::new("T", "Torque", "N*m"),
                ],
                assumptions: vec!["Steady rotation", "ω = 0 yields an infinite or NaN torque"],
                category: EquationCategory::Rotation,
                source_module: "equations/rotation.rs",
                source_function: "power_to_torque",
            },

            Equation::SpringSystem => EquationMetadata {
                name: "Spring Force and Energy",
                description: "Restoring force and stored elastic energy of a linear spring",
                formula_plain: "F = -k*x, U = k*x^2/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("k", "Spring stiffness", "N/m"),
                    Variable::new("x", "Displacement from free length", "m"),
                    Variable::new("F", "Restoring force", "N"),
                    Variable::new("U", "Stored energy", "J"),
                ],
                assumptions: vec!["Linear spring (Hooke's law)", "Negative force is restoring"],
                category: EquationCategory::Vibration,
                source_module: "equations/vibration.rs",
                source_function: "spring_system",
            },

            Equation::DampedOscillation => EquationMetadata {
                name: "Damped Oscillation",
                description: "Free response of an underdamped single-degree-of-freedom oscillator",
                formula_plain: "x = x0 * exp(-zeta*omega_n*t) * cos(omega_n*t)",
                reference: CodeReference::Hibbeler { edition: 14, volume: "Dynamics", section: "22.5" },
                variables: vec![
                    Variable::new("x0", "Initial displacement", "m"),
                    Variable::new("ζ", "Damping ratio", "-"),
                    Variable::new("ωn", "Natural frequency", "rad/s"),
                    Variable::new("t", "Time", "s"),
                ],
                assumptions: vec!["Underdamped (ζ < 1)", "Phase taken at ωn, cosine start"],
                category: EquationCategory::Vibration,
                source_module: "equations/vibration.rs",
                source_function: "damped_oscillation",
            },
        }
    }

    /// Name of the implementing function (also the serialized name)
    pub fn function_name(&self) -> &'static str {
        self.metadata().source_function
    }

    /// Look up an equation by its function name (e.g. "power_to_torque")
    pub fn from_name(name: &str) -> CalcResult<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .find(|eq| eq.function_name() == name)
            .ok_or_else(|| CalcError::unknown_equation(name))
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Stress, Statics, Kinematics, Thermal, Rotation, Beams, Vibration];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::VonMisesStress,
    Equation::ProjectileTrajectory,
    Equation::ForceResultant,
    Equation::ThermalExpansion,
    Equation::AngularVelocityConversion,
    Equation::BeamDeflection,
    Equation::VelocityComponents,
    Equation::PowerToTorque,
    Equation::SpringSystem,
    Equation::DampedOscillation,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Gearbox input shaft")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during one or more calculations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, categories in sort order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the EQUATIONS.md reference document from the registry.
///
/// ```rust
/// use mech_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("MechCalc Equations Reference"));
/// assert!(markdown.contains("## Vibration"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(12_000);

    output.push_str(
        r#"# MechCalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula implemented in mech_core, with its
reference, variables, assumptions, and implementing function.

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Angles | Counterclockwise from +x, in degrees |
| Vertical displacement | Upward |
| Beam deflection | Upward (downward tip load gives y < 0) |
| Spring force | Along +x; restoring force is -k*x |
| Stress | Tension |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
