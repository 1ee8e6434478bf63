use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Página visible, en base 1
    pub current_page: u32,
    pub total_pages: u32,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let pages = (1..=props.total_pages).map(|page| {
        let class = if page == props.current_page {
            "page-btn active"
        } else {
            "page-btn"
        };
        let onclick = {
            let on_change = props.on_change.clone();
            Callback::from(move |_e: MouseEvent| on_change.emit(page))
        };
        html! {
            <button key={page} {class} {onclick}>{page}</button>
        }
    });

    let prev = {
        let on_change = props.on_change.clone();
        let current = props.current_page;
        Callback::from(move |_e: MouseEvent| {
            if current > 1 {
                on_change.emit(current - 1);
            }
        })
    };
    let next = {
        let on_change = props.on_change.clone();
        let current = props.current_page;
        let total = props.total_pages;
        Callback::from(move |_e: MouseEvent| {
            if current < total {
                on_change.emit(current + 1);
            }
        })
    };

    html! {
        <div class="pagination">
            <button class="page-btn" onclick={prev} disabled={props.current_page == 1}>
                {"‹"}
            </button>
            { for pages }
            <button class="page-btn" onclick={next} disabled={props.current_page == props.total_pages}>
                {"›"}
            </button>
        </div>
    }
}
