//! Turn a recorded frame into GPU instances

use fronton_core::DrawList;

use super::resources::InstanceData;

/// Instances for one frame, split by mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBatch {
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl FrameBatch {
    pub fn from_draw_list(list: &DrawList) -> Self {
        let rects = list
            .rects()
            .map(|(origin, size, color)| InstanceData {
                transform: [origin.x, origin.y, size.x, size.y],
                tint: color.to_f32_array(),
            })
            .collect();

        // Circle mesh has unit radius around its origin
        let circles = list
            .circles()
            .map(|(center, radius, color)| InstanceData {
                transform: [center.x, center.y, radius, radius],
                tint: color.to_f32_array(),
            })
            .collect();

        Self { rects, circles }
    }
}
