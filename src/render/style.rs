/// 頁面內嵌樣式；`compact` class 決定顯示哪一條技能版面
pub const PAGE_CSS: &str = r#"
*,*::before,*::after{box-sizing:border-box}
:root{--bg:#fafafa;--fg:#18181b;--muted:#71717a;--muted-bg:#f4f4f5;--border:#e4e4e7;--primary:#2563eb;--accent:#eff6ff}
body{margin:0;background:var(--bg);color:var(--fg);font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;line-height:1.5}
a{color:var(--primary);text-decoration:none}
a:hover{text-decoration:underline}
.page{min-height:100vh}
.container{max-width:56rem;margin:0 auto;padding:2rem 1rem}
h2{font-size:1.875rem;font-weight:700;color:var(--primary);margin:0 0 1.25rem}
h3{font-size:1.125rem;font-weight:600;margin:0}
.profile{display:flex;flex-direction:column;align-items:center;text-align:center;margin-bottom:4rem}
.profile-avatar{border-radius:50%;object-fit:cover;margin-bottom:1rem}
.profile h1{font-size:2.25rem;margin:0}
.profile-title{font-size:1.25rem;color:var(--muted);margin:.25rem 0}
.profile-location{color:var(--muted);margin:0}
.profile-bio{max-width:40rem;white-space:pre-line}
.links{display:flex;flex-wrap:wrap;gap:.75rem;justify-content:center;margin-top:.5rem}
.section{margin-bottom:5rem}
.cards{display:grid;gap:1rem}
.card{display:flex;gap:1rem;padding:1.25rem;border:1px solid var(--border);border-radius:.75rem;background:#fff}
.item-logo{object-fit:contain;flex-shrink:0}
.item-body{flex:1;min-width:0}
.item-header{display:flex;flex-wrap:wrap;justify-content:space-between;gap:.5rem}
.item-date{color:var(--muted);font-size:.875rem}
.item-secondary{margin:.25rem 0 0;font-weight:500}
.item-location{margin:0;color:var(--muted);font-size:.875rem}
.item-description{margin:.5rem 0 0;white-space:pre-line}
.item-list{list-style:none;padding:0;margin:0}
.list-item{display:flex;gap:1rem;padding:1rem 0;border-bottom:1px solid var(--border)}
.timeline{list-style:none;margin:0;padding:0 0 0 1.5rem;border-left:2px solid var(--border)}
.timeline-item{position:relative;display:flex;gap:1rem;padding-bottom:2rem}
.timeline-dot{position:absolute;left:-1.95rem;top:.35rem;width:.8rem;height:.8rem;border-radius:50%;background:var(--primary)}
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1.5rem;perspective:1000px}
.project-card{transform-style:preserve-3d;transition:transform .3s ease}
.project-card:hover{transform:rotateX(4deg) rotateY(-6deg) translateZ(8px)}
.project-card-inner{height:100%;padding:1.25rem;border:1px solid var(--border);border-radius:.75rem;background:#fff;box-shadow:0 4px 16px rgba(0,0,0,.06)}
.project-image{width:100%;height:auto;border-radius:.5rem;margin-bottom:.75rem}
.tags{display:flex;flex-wrap:wrap;gap:.5rem;list-style:none;padding:0;margin:.75rem 0}
.tag{padding:.125rem .625rem;border-radius:999px;background:var(--muted-bg);color:var(--muted);font-size:.75rem}
.skills{margin-bottom:7rem}
.skills .section-heading{text-align:center;margin-bottom:2rem}
.skills h3{text-align:center;margin-bottom:1rem}
.skill-grid{display:grid;gap:1rem}
.skill-grid--compact{grid-template-columns:repeat(3,1fr);margin-bottom:2rem}
.skill-grid--remaining{grid-template-columns:repeat(2,1fr)}
@media (min-width:640px){.skill-grid--remaining{grid-template-columns:repeat(3,1fr)}}
@media (min-width:768px){.skill-grid--remaining{grid-template-columns:repeat(4,1fr)}}
@media (min-width:1024px){.skill-grid--remaining{grid-template-columns:repeat(6,1fr)}}
.skill-tile{display:flex;flex-direction:column;align-items:center;gap:.5rem;padding:.75rem;border:1px solid var(--border);border-radius:.5rem;transition:all .2s}
.skill-tile:hover{border-color:var(--primary);background:var(--accent)}
.skill-tile img{object-fit:contain;transition:transform .2s}
.skill-tile:hover img{transform:scale(1.1)}
.skill-name{font-size:.75rem;font-weight:500;text-align:center;color:var(--muted)}
.skill-pills{display:flex;flex-wrap:wrap;justify-content:center;gap:.75rem;max-width:56rem;margin:0 auto}
.skill-pill{padding:.25rem .75rem;border-radius:999px;background:var(--muted-bg);color:var(--muted);font-size:.875rem;font-weight:500}
.skills-extra{margin-top:2rem}
.orbit-stage{position:relative;overflow:hidden;height:500px;width:100%;max-width:42rem;margin:0 auto 2rem}
.orbit{position:absolute;inset:0}
.orbit-path{position:absolute;left:50%;top:50%;width:calc(var(--radius)*2);height:calc(var(--radius)*2);margin:calc(var(--radius)*-1) 0 0 calc(var(--radius)*-1);border:1px solid rgba(0,0,0,.1);border-radius:50%;pointer-events:none}
.orbit-icon{position:absolute;left:50%;top:50%;width:var(--icon-size);height:var(--icon-size);margin:calc(var(--icon-size)/-2) 0 0 calc(var(--icon-size)/-2);display:flex;align-items:center;justify-content:center;animation:orbit var(--duration) linear infinite}
.orbit--reverse .orbit-icon{animation-direction:reverse}
.orbit-icon img{object-fit:contain}
@keyframes orbit{from{transform:rotate(var(--angle)) translateY(calc(var(--radius)*-1)) rotate(calc(var(--angle)*-1))}to{transform:rotate(calc(var(--angle) + 360deg)) translateY(calc(var(--radius)*-1)) rotate(calc((var(--angle) + 360deg)*-1))}}
html.compact .view-wide{display:none}
html:not(.compact) .view-compact{display:none}
.footer{text-align:center;color:var(--muted);font-size:.875rem;padding:2rem 0}
"#;

/// Keeps the `compact` class on `<html>` in sync with the window width.
pub fn compact_mode_script(breakpoint: u32) -> String {
    format!(
        "(function(){{var bp={breakpoint};var root=document.documentElement;\
function check(){{root.classList.toggle('compact',window.innerWidth<bp);}}\
check();window.addEventListener('resize',check);\
window.addEventListener('pagehide',function(){{window.removeEventListener('resize',check);}});\
window.addEventListener('pageshow',function(e){{if(e.persisted){{check();window.addEventListener('resize',check);}}}});}})();"
    )
}
