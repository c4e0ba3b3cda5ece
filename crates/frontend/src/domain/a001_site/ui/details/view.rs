use super::view_model::NewSiteVm;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn NewSiteDialog(vm: NewSiteVm) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Dialog open=vm.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add New Site"</DialogTitle>
                    <DialogContent>
                        <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin-top: 0;">
                            "Create a new site to track safety and compliance."
                        </p>
                        <Flex vertical=true gap=FlexGap::Large style="padding: 12px 0;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Site Name"</Label>
                                <Input value=vm.name placeholder="e.g., North Field Operations" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Location"</Label>
                                <Input value=vm.location placeholder="e.g., Story County, IA" />
                            </Flex>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(ctx)
                        >
                            "Create Site"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
