use crate::domain::Manifest;
use crate::domain::layout::template_prefix;

pub const DEMO_TEMPLATE_COUNT: usize = 3;
pub const DEMO_VERSION: &str = "1.0.0";
pub const DEMO_DESCRIPTION: &str = "Demo manifest for selection workflow";
pub const DEMO_TEMPLATE_BODY: &str = "This is a demo template.\n\
Bla-bla-bla placeholder line 2.\n\
Bla-bla-bla placeholder line 3.\n\
Bla-bla-bla placeholder line 4.\n";

/// Demo manifests `tpl-01` through `tpl-03`, in id order.
pub fn demo_manifests() -> Vec<Manifest> {
    (1..=DEMO_TEMPLATE_COUNT)
        .map(|index| {
            let id = format!("tpl-{index:02}");
            Manifest {
                prefix: template_prefix(&id),
                id,
                name: format!("Sample Template {index}"),
                version: DEMO_VERSION.to_string(),
                description: DEMO_DESCRIPTION.to_string(),
            }
        })
        .collect()
}
