use fragments::Theme;
use once_cell::sync::Lazy;

/// Class lists for every semantic name the site templates use.
pub static SITE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("page", "min-h-screen")
        .add("hero", "py-8 sm:py-10 md:py-12")
        .add(
            "hero_title",
            "capabilities-gradient-text font-semibold leading-[1.2] tracking-tight text-[24px] sm:text-[30px] md:text-[38px] lg:text-[50px]",
        )
        .add(
            "hero_description",
            "text-left md:text-justify text-[14px] sm:text-[15px] md:text-[17px] lg:text-[20px] font-semibold text-black leading-relaxed",
        )
        .add("container", "container mx-auto px-4 py-12 sm:py-16 md:py-20")
        .add("chips", "mb-6 sm:mb-7 md:mb-8 flex flex-wrap items-center gap-2 sm:gap-3")
        .add(
            "chips_label",
            "font-medium text-brand-black text-[12px] sm:text-[13px] md:text-[14px] uppercase tracking-wide",
        )
        .add(
            "chip",
            "px-3 sm:px-4 md:px-5 py-1.5 sm:py-2 rounded-full font-medium bg-gray-100 text-brand-black hover:bg-gray-200",
        )
        .add(
            "chip_selected",
            "px-3 sm:px-4 md:px-5 py-1.5 sm:py-2 rounded-full font-medium bg-brand-orange text-brand-black shadow-lg",
        )
        .add("notice", "text-center py-8 sm:py-12 px-4 text-gray-600")
        .add("grid", "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 md:gap-8")
        .add(
            "card",
            "bg-white rounded-2xl overflow-hidden shadow-lg relative group border-2 border-gray-200",
        )
        .add("card_image", "w-full h-48 sm:h-52 md:h-56 object-cover")
        .add("card_body", "p-4 sm:p-5 md:p-6")
        .add("card_title", "text-sm sm:text-base md:text-lg lg:text-xl font-bold text-brand-black mb-2")
        .add("card_text", "text-gray-600 text-[12px] sm:text-[13px] md:text-[14px] lg:text-base line-clamp-2")
        .add("card_meta", "flex items-center gap-2 sm:gap-3 text-[12px] sm:text-[13px] text-muted-foreground")
        .add("badge", "bg-white/90 text-brand-orange rounded-full px-2 py-0.5 text-xs")
        .add(
            "avatar",
            "w-8 h-8 rounded-full bg-secondary flex items-center justify-center font-semibold",
        )
        .add("button", "px-4 py-2 rounded-lg bg-brand-orange text-white font-medium")
        .add(
            "button_outline",
            "px-4 py-2 rounded-lg border-2 border-brand-orange text-brand-orange font-medium",
        )
        .add(
            "pagination",
            "flex flex-col sm:flex-row justify-center items-center gap-3 sm:gap-2 mt-12",
        )
        .add(
            "page_nav",
            "px-3 sm:px-4 py-1.5 sm:py-2 rounded-lg font-medium bg-gray-100 text-brand-black disabled:opacity-40",
        )
        .add("page_number", "min-w-[40px] h-10 rounded-lg font-medium bg-gray-100 text-brand-black")
        .add(
            "page_number_current",
            "min-w-[40px] h-10 rounded-lg font-medium bg-brand-orange text-white shadow-lg",
        )
        .add("empty", "py-8 sm:py-12 md:py-16 text-center max-w-2xl mx-auto px-4")
        .add("empty_title", "text-h3 font-bold text-foreground mb-4")
        .add("empty_text", "text-gray-600 mb-8 leading-relaxed")
        .add(
            "modal_backdrop",
            "fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-2 sm:p-4",
        )
        .add(
            "modal",
            "bg-white rounded-xl sm:rounded-2xl shadow-2xl w-full max-h-[90vh] overflow-y-auto",
        )
        .add(
            "modal_header",
            "sticky top-0 bg-white border-b border-gray-200 px-4 sm:px-6 py-3 sm:py-4 flex items-center justify-between",
        )
        .add("modal_title", "text-lg sm:text-xl md:text-2xl font-bold text-foreground pr-4")
        .add("modal_close", "p-2 hover:bg-gray-100 rounded-full")
        .add("modal_body", "p-4 sm:p-6")
        .add("section_title", "text-base sm:text-lg font-bold text-brand-black mb-2")
        .add("markdown", "markdown-content prose max-w-none")
        .add("contact_box", "bg-gray-50 p-4 sm:p-6 rounded-lg mb-4 sm:mb-6")
        .add("actions", "flex flex-col sm:flex-row gap-3 sm:gap-4")
        .add("contact_rail", "fixed right-0 top-1/2 -translate-y-1/2 z-40 flex flex-col gap-2")
        .add(
            "contact_item",
            "flex items-center gap-2 p-3 rounded-l-xl bg-brand-black/80 text-brand-orange",
        )
});
