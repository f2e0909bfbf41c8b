pub mod badge;
pub mod footer;
pub mod nav;
pub mod profile {
    pub mod characters_tab;
    pub mod fit_check_tab;
    pub mod history_tab;
    pub mod mast;
    pub mod notes_tab;
    pub mod profile_tabs;
    pub mod skills_tab;
}
