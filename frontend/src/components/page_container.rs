use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageContainerProps {
    pub children: Children,
}

#[function_component(PageContainer)]
pub fn page_container(props: &PageContainerProps) -> Html {
    html! {
        <div class="flex min-h-screen bg-background">
            <main class="flex-1 p-6 max-w-7xl mx-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
