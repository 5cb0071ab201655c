//! Global Styles for Vitrine
//!
//! Single stylesheet injected once at the app root. Layout, cards,
//! reveal animations, the gallery grid, the fullscreen viewer and the
//! narrow-layout navigation all live here.

pub const GLOBAL_STYLES: &str = r#"
/* === Reset & Base === */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --bg: #101014;
    --surface: #18181f;
    --surface-hover: #20202a;
    --border: #2a2a35;
    --accent: #c9a227;
    --accent-soft: rgba(201, 162, 39, 0.25);
    --text-primary: #ececf1;
    --text-secondary: rgba(236, 236, 241, 0.72);
    --text-muted: rgba(236, 236, 241, 0.45);
    --danger: #e2556a;
    --radius-md: 8px;
    --radius-lg: 14px;
    --transition-fast: 0.15s ease;
    --transition-normal: 0.3s ease;
}

html, body {
    height: 100%;
    overflow: hidden;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
        "Helvetica Neue", Arial, sans-serif;
    background: var(--bg);
    color: var(--text-primary);
    -webkit-font-smoothing: antialiased;
}

#main {
    height: 100vh;
}

button {
    font: inherit;
    color: inherit;
}

::selection {
    background: var(--accent-soft);
}

.app-shell {
    width: 100%;
    height: 100vh;
    background: var(--bg);
    color: var(--text-primary);
}

/* === Layout === */
.layout {
    display: flex;
    height: 100vh;
}

.content {
    flex: 1;
    min-width: 0;
    overflow-y: auto;
}

/* Scroll lock while the viewer is open */
.content.locked {
    overflow: hidden;
}

.content-inner {
    max-width: 820px;
    margin: 0 auto;
    padding: 48px 32px 120px;
}

.content::-webkit-scrollbar {
    width: 10px;
}

.content::-webkit-scrollbar-track {
    background: transparent;
}

.content::-webkit-scrollbar-thumb {
    background: var(--border);
    border-radius: 5px;
}

.content::-webkit-scrollbar-thumb:hover {
    background: var(--surface-hover);
}

/* === Sidebar === */
.sidebar {
    width: 250px;
    flex-shrink: 0;
    padding: 36px 24px;
    background: var(--bg);
    border-right: 1px solid var(--border);
    overflow-y: auto;
}

.owner-name {
    font-size: 1.35rem;
    font-weight: 600;
    letter-spacing: 0.02em;
}

.owner-tagline {
    margin-top: 6px;
    font-size: 0.85rem;
    line-height: 1.5;
    color: var(--text-muted);
}

.side-nav {
    display: flex;
    flex-direction: column;
    gap: 4px;
    margin-top: 28px;
}

.side-link {
    display: block;
    padding: 10px 14px;
    border-left: 2px solid transparent;
    border-radius: var(--radius-md);
    color: var(--text-secondary);
    font-size: 0.95rem;
    text-decoration: none;
    transition: color var(--transition-fast), background var(--transition-fast),
        border-color var(--transition-fast);
}

.side-link:hover {
    color: var(--text-primary);
    background: var(--surface-hover);
}

.side-link.active {
    color: var(--accent);
    border-left-color: var(--accent);
    background: var(--surface);
}

.sidebar-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.45);
    z-index: 90;
}

/* === Mobile Menu Button === */
.mobile-menu-btn {
    position: fixed;
    top: 20px;
    left: 20px;
    z-index: 100;
    width: 48px;
    height: 48px;
    display: none;
    align-items: center;
    justify-content: center;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius-lg);
    color: var(--text-primary);
    cursor: pointer;
    transition: all var(--transition-fast);
    backdrop-filter: blur(10px);
}

.mobile-menu-btn:hover {
    background: var(--surface-hover);
    transform: scale(1.05);
}

.mobile-menu-btn.hidden {
    opacity: 0;
    pointer-events: none;
    transform: translateY(-8px);
}

.mobile-menu-btn svg {
    width: 20px;
    height: 20px;
    stroke: currentColor;
}

/* === Cards === */
.card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius-lg);
    padding: 32px;
    margin-bottom: 32px;
    will-change: transform;
    transition: transform var(--transition-fast),
        border-color var(--transition-normal),
        box-shadow var(--transition-normal);
}

.card:hover {
    border-color: var(--surface-hover);
}

.card.active {
    border-color: var(--accent);
    box-shadow: 0 0 0 1px var(--accent-soft);
}

.card-title {
    font-size: 1.5rem;
    font-weight: 600;
    letter-spacing: 0.01em;
    margin-bottom: 18px;
}

.card-intro {
    color: var(--text-secondary);
    line-height: 1.7;
    margin-bottom: 24px;
}

.card-intro p {
    margin-bottom: 12px;
}

.card-intro a {
    color: var(--accent);
}

.card-intro code {
    background: var(--surface-hover);
    padding: 2px 6px;
    border-radius: 4px;
    font-size: 0.88em;
}

.info-list {
    display: flex;
    flex-direction: column;
    gap: 12px;
    margin-bottom: 24px;
}

.info-item {
    display: flex;
    gap: 14px;
    padding: 14px 16px;
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: var(--radius-md);
}

.info-label {
    flex-shrink: 0;
    min-width: 110px;
    color: var(--accent);
    font-size: 0.78rem;
    font-weight: 600;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    line-height: 1.9;
}

.info-text {
    color: var(--text-secondary);
    line-height: 1.6;
}

/* === Reveal Animation === */
.reveal {
    opacity: 0;
    transform: translateY(18px);
}

/* Final state as plain declarations so the tilt transform can take
   over once the entrance has played. */
.reveal.animate-in {
    opacity: 1;
    transform: translateY(0);
    animation: fade-up 0.6s ease backwards;
}

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(18px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

/* === Gallery Grid === */
.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 14px;
}

.gallery-thumb {
    padding: 0;
    aspect-ratio: 4 / 3;
    background: var(--surface-hover);
    border: 1px solid var(--border);
    border-radius: var(--radius-md);
    overflow: hidden;
    cursor: zoom-in;
    transition: border-color var(--transition-fast),
        transform var(--transition-fast);
}

.gallery-thumb:hover {
    border-color: var(--accent);
    transform: translateY(-2px);
}

.gallery-thumb:focus-visible {
    outline: 2px solid var(--accent);
    outline-offset: 2px;
}

.thumb-img {
    display: block;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.thumb-placeholder {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--text-muted);
    font-size: 0.8rem;
}

.thumb-placeholder.error {
    color: var(--danger);
}

.loading-spinner {
    width: 22px;
    height: 22px;
    border: 2px solid var(--border);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to {
        transform: rotate(360deg);
    }
}

/* === Fullscreen Viewer === */
.lightbox-overlay {
    position: fixed;
    inset: 0;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.9);
    backdrop-filter: blur(10px);
    animation: lightbox-fade 0.3s ease;
    outline: none;
}

@keyframes lightbox-fade {
    from {
        opacity: 0;
    }
    to {
        opacity: 1;
    }
}

.lightbox-content {
    position: relative;
    max-width: 90vw;
    max-height: 90vh;
    display: flex;
    align-items: center;
    justify-content: center;
}

.lightbox-image {
    max-width: 100%;
    max-height: 90vh;
    border-radius: var(--radius-md);
    box-shadow: 0 25px 80px rgba(0, 0, 0, 0.6);
}

.lightbox-loading,
.lightbox-error {
    width: 320px;
    height: 240px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--text-muted);
}

.lightbox-error {
    color: var(--danger);
}

.lightbox-close,
.lightbox-prev,
.lightbox-next {
    position: fixed;
    z-index: 10;
    width: 48px;
    height: 48px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.1);
    border: none;
    border-radius: 50%;
    color: white;
    cursor: pointer;
    transition: background var(--transition-fast),
        transform var(--transition-fast);
}

.lightbox-close {
    top: 20px;
    right: 20px;
}

.lightbox-close:hover {
    background: rgba(255, 255, 255, 0.2);
    transform: scale(1.1);
}

.lightbox-prev {
    left: 20px;
    top: 50%;
    transform: translateY(-50%);
}

.lightbox-next {
    right: 20px;
    top: 50%;
    transform: translateY(-50%);
}

.lightbox-prev:hover,
.lightbox-next:hover {
    background: rgba(255, 255, 255, 0.2);
    transform: translateY(-50%) scale(1.1);
}

.lightbox-counter {
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    padding: 8px 18px;
    background: rgba(0, 0, 0, 0.55);
    border-radius: 999px;
    color: white;
    font-size: 0.9rem;
    letter-spacing: 0.05em;
}

.lightbox-counter .current {
    color: var(--accent);
    font-weight: 600;
}

.lightbox-counter .total {
    color: rgba(255, 255, 255, 0.7);
}

/* === Narrow Layout === */
@media (max-width: 768px) {
    .mobile-menu-btn {
        display: flex;
    }

    .sidebar {
        position: fixed;
        top: 0;
        left: 0;
        bottom: 0;
        width: 260px;
        z-index: 95;
        transform: translateX(-100%);
        transition: transform var(--transition-normal);
        box-shadow: 0 0 40px rgba(0, 0, 0, 0.5);
    }

    .sidebar.open {
        transform: translateX(0);
    }

    .content-inner {
        padding: 88px 20px 80px;
    }

    .lightbox-close,
    .lightbox-prev,
    .lightbox-next {
        width: 40px;
        height: 40px;
    }

    .lightbox-close {
        top: 10px;
        right: 10px;
    }

    .lightbox-prev {
        left: 10px;
    }

    .lightbox-next {
        right: 10px;
    }
}

/* === Reduced Motion === */
.reduced-motion *,
.reduced-motion *::before,
.reduced-motion *::after {
    animation: none !important;
    transition: none !important;
}

.reduced-motion .reveal {
    opacity: 1;
    transform: none;
}
"#;
