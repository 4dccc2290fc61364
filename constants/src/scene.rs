/// glTF node holding the static label surface behind the neon letters.
pub const LABEL_NODE: &str = "Text006";

/// Material applied to the label surface.
pub const LABEL_MATERIAL: &str = "CCL Matte Metal Black";

/// Material cloned once per letter so each letter glows independently.
pub const NEON_MATERIAL: &str = "Neon";

/// glTF nodes of the six neon letters, in sign order.
pub const LETTER_NODES: [&str; 6] = [
    "Text008", "Text009", "Text010", "Text011", "Text012", "Text013",
];

/// Name of the backdrop plane. Never selectable.
pub const BACKGROUND_PLANE_NAME: &str = "BackgroundPlane";

/// Backdrop plane size before scaling, and its transform.
pub const BACKGROUND_PLANE_SIZE: f32 = 20.0;
pub const BACKGROUND_PLANE_POSITION: [f32; 3] = [0.0, 0.0, -0.5];
pub const BACKGROUND_PLANE_SCALE: [f32; 3] = [10.0, 10.0, 1.0];

pub const LABEL_POSITION: [f32; 3] = [0.0, 0.392, 0.006];
pub const LABEL_SCALE: [f32; 3] = [1.0, 0.791, 1.0];

pub const LETTER_POSITION: [f32; 3] = [0.0, 0.392, 0.04];
pub const LETTER_SCALE: [f32; 3] = [1.0, 0.382, 1.0];

/// Rotation about X applied to the label and letters, which are authored lying flat.
pub const SIGN_ROTATION_X: f32 = std::f32::consts::FRAC_PI_2;
