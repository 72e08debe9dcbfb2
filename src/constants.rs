pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "PROFILEPRO_MODEL";
pub const API_BASE_VAR: &str = "PROFILEPRO_API_BASE";
pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const DOWNLOAD_FILE_NAME: &str = "linkedin-profile-pro.jpg";
pub const NO_IMAGE_MESSAGE: &str = "No image returned from the model.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate image. Please try again.";
pub const SPINNER_MESSAGE: &str = "Applying AI magic...";
pub const CMD_GENERATE: &str = "g";
pub const CMD_EDIT: &str = "e";

pub const HEADSHOT_PROMPT: &str = "Use this photo as a faithful base for my face, maintaining my real characteristics (face shape, beard, hair, skin tone, and natural expressions).

Generate a professional LinkedIn photo with the following characteristics:
- Modern corporate style
- Appearance of a Data Engineer / Senior Tech Professional
- Confident expression, slight natural smile
- Upright posture, chest-up framing
- Soft and professional lighting (corporate studio style)
- Elegant neutral background (light gray, soft dark blue, or sophisticated blurred office)
- Clothing: well-fitted dress shirt (white, blue, or black) or modern minimalist blazer
- Clean appearance, skin slightly smoothed but maintaining natural texture (no exaggeration or artificial effect)
- High definition, realistic photographic quality (must not look like AI or caricature)
- Slight depth of field with blurred background
- Style similar to executive corporate profile photos in large tech companies

The image should convey: technical competence, intelligence, leadership, reliability, and strategic vision.

Avoid: artificial appearance, excessive sharpness, overly flashy background, AI-generated look, exaggerated skin editing.";
