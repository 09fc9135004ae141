// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the demo window and the toast.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Toast**: Geometry and colors of the toast label

## Examples

```
use fade_toast::ui::design_tokens::{palette, spacing};
use iced::Color;

let muted = Color { a: 0.5, ..palette::WHITE };
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// `#444444`
    pub const GRAY_650: Color = Color::from_rgb(0.267, 0.267, 0.267);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, status lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Toast
// ============================================================================

pub mod toast {
    use super::{palette, spacing, typography, Color};
    use iced::{Shadow, Vector};

    pub const BACKGROUND: Color = palette::GRAY_650;
    pub const TEXT: Color = palette::WHITE;
    pub const TEXT_SIZE: f32 = typography::BODY;

    pub const PADDING_VERTICAL: f32 = 14.0;
    pub const PADDING_HORIZONTAL: f32 = spacing::LG;

    /// Large enough to round a single line into a pill.
    pub const RADIUS: f32 = 30.0;

    pub const SHADOW: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // A pill needs a radius of at least half its height.
    assert!(toast::RADIUS * 2.0 >= toast::TEXT_SIZE + toast::PADDING_VERTICAL * 2.0);
};
