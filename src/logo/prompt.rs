// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed prompt and request body sent to the image provider

use serde::{Deserialize, Serialize};

/// Logo description sent upstream for every request
///
/// The caller's `prompt`, `style` and `background` fields are NOT interpolated
/// into this text. Wiring them in is an open product decision.
pub const LOGO_PROMPT: &str = "
        Design a professional logo icon for CodeQual.dev:
        - Shield-shaped logo with clean, modern design
        - Two angle brackets `<` and `>` as stylized 'eyes'
        - Centered green checkmark `✓` as a 'smile'
        - Dark grey outline
        - White background
        - Flat, vector-style illustration
        Convey code quality, trust, and positivity
        ";

pub const NEGATIVE_PROMPT: &str = "photorealistic, 3D, complex, busy, text, words";

pub const IMAGE_WIDTH: u32 = 512;
pub const IMAGE_HEIGHT: u32 = 512;
pub const NUM_INFERENCE_STEPS: u32 = 20;
pub const GUIDANCE_SCALE: f32 = 7.5;

/// JSON body for the FAL Flux endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalImageRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl FalImageRequest {
    /// The CodeQual.dev logo request
    pub fn logo() -> Self {
        Self {
            prompt: LOGO_PROMPT.to_string(),
            negative_prompt: NEGATIVE_PROMPT.to_string(),
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            num_inference_steps: NUM_INFERENCE_STEPS,
            guidance_scale: GUIDANCE_SCALE,
        }
    }
}
