pub mod bootstrap {
    pub const INIT_START: &str = "异物表交互脚本初始化...";
    pub const INIT_DONE: &str = "异物表交互脚本初始化完成。";
}

pub mod filter {
    pub const ALL: &str = "全部";
    pub const EUCLID: &str = "Euclid级";
    pub const KETER: &str = "Keter级";
    pub const PENDING: &str = "待定";
}

pub mod back_to_top {
    pub const ICON: &str = "↑";
    pub const TOOLTIP: &str = "返回顶部";
}

pub mod content_toggler {
    pub const TITLE: &str = "📖 档案导航";
}

pub mod theme_switcher {
    pub const TOOLTIP: &str = "切换主题";
}

pub mod loading_overlay {
    pub const TEXT: &str = "异物表档案加载中...";
}

pub mod font_size {
    pub const DECREASE_ICON: &str = "A⁻";
    pub const DECREASE: &str = "减小字体";
    pub const RESET_ICON: &str = "A⸰";
    pub const RESET: &str = "重置字体";
    pub const INCREASE_ICON: &str = "A⁺";
    pub const INCREASE: &str = "增大字体";
}
