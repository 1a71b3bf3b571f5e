/// Declared domain for one tunable parameter. The panel binder draws a
/// matching widget and clamps every committed value to this domain before
/// the generator sees it.
#[derive(Clone, Copy)]
pub enum ParamDomain {
    /// Continuous range; `step` of 0.0 means unstepped.
    Range { min: f64, max: f64, step: f64 },
    IntRange { min: u32, max: u32 },
    Toggle,
    Text,
}

#[derive(Clone, Copy)]
pub struct ParamSpec {
    pub key: &'static str,
    pub domain: ParamDomain,
}

pub enum ParamBinding<'a> {
    Float(&'a mut f32),
    Int(&'a mut u32),
    Bool(&'a mut bool),
    Text(&'a mut String),
}

/// A single panel control: one parameter field, one declared domain.
pub struct Control<'a> {
    pub spec: ParamSpec,
    pub binding: ParamBinding<'a>,
}

impl<'a> Control<'a> {
    pub fn slider(key: &'static str, value: &'a mut f32, min: f64, max: f64, step: f64) -> Self {
        Self {
            spec: ParamSpec {
                key,
                domain: ParamDomain::Range { min, max, step },
            },
            binding: ParamBinding::Float(value),
        }
    }

    pub fn int_slider(key: &'static str, value: &'a mut u32, min: u32, max: u32) -> Self {
        Self {
            spec: ParamSpec {
                key,
                domain: ParamDomain::IntRange { min, max },
            },
            binding: ParamBinding::Int(value),
        }
    }

    pub fn toggle(key: &'static str, value: &'a mut bool) -> Self {
        Self {
            spec: ParamSpec {
                key,
                domain: ParamDomain::Toggle,
            },
            binding: ParamBinding::Bool(value),
        }
    }

    pub fn text(key: &'static str, value: &'a mut String) -> Self {
        Self {
            spec: ParamSpec {
                key,
                domain: ParamDomain::Text,
            },
            binding: ParamBinding::Text(value),
        }
    }

    /// Clamps the bound value back into its declared domain.
    pub fn clamp(&mut self) {
        match (&mut self.binding, self.spec.domain) {
            (ParamBinding::Float(v), ParamDomain::Range { min, max, .. }) => {
                **v = clamp_float(**v, min as f32, max as f32);
            }
            (ParamBinding::Int(v), ParamDomain::IntRange { min, max }) => {
                **v = clamp_int(**v, min, max);
            }
            _ => {}
        }
    }
}

pub fn clamp_float(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

pub fn clamp_int(value: u32, min: u32, max: u32) -> u32 {
    value.max(min).min(max)
}
