pub const PAGE: &str = "neon-bg";
pub const TITLE: &str = "neon-title";
pub const WHEEL_CONTAINER: &str = "wheel-container";
pub const POINTER: &str = "pointer";
pub const CONTROLS: &str = "controls";
pub const BUTTON: &str = "neon-btn";
pub const RESULT: &str = "result neon-text";
pub const RESULT_WIN: &str = "result-win";
pub const RESULT_LOSE: &str = "result-lose";
pub const SPINNING: &str = "spinning";

pub const WHEEL_BACKGROUND: &str = "#181818";
pub const WHEEL_STROKE: &str = "#fff";
pub const GLOW_FILTER_ID: &str = "neon-glow";

// Easing used for the rotation transition.
pub const SPIN_EASING: &str = "cubic-bezier(.17,.67,.83,.67)";

pub const NEON_CSS: &str = r#"
.neon-bg {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    background: radial-gradient(circle at center, #1a0033 0%, #050505 70%);
    color: #fff;
    font-family: 'Segoe UI', sans-serif;
}

.neon-title {
    font-size: 2.6rem;
    margin-bottom: 1.5rem;
    color: #fff;
    text-shadow: 0 0 6px #ff00de, 0 0 14px #ff00de, 0 0 28px #bc13fe;
}

.wheel-container {
    position: relative;
    width: 400px;
    height: 400px;
}

.wheel-container svg.spinning {
    filter: drop-shadow(0 0 18px #00eaff);
}

.pointer {
    position: absolute;
    top: -28px;
    left: 50%;
    transform: translateX(-50%);
    font-size: 2.4rem;
    color: #fff700;
    text-shadow: 0 0 8px #fff700, 0 0 16px #ff9900;
    pointer-events: none;
}

.controls {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}

.neon-btn {
    padding: 0.7rem 2.2rem;
    font-size: 1.1rem;
    font-weight: bold;
    color: #fff;
    background: transparent;
    border: 2px solid #00eaff;
    border-radius: 999px;
    box-shadow: 0 0 8px #00eaff, inset 0 0 8px #00eaff;
    cursor: pointer;
    transition: box-shadow 0.2s, opacity 0.2s;
}

.neon-btn:hover:not(:disabled) {
    box-shadow: 0 0 16px #00eaff, inset 0 0 12px #00eaff;
}

.neon-btn:disabled {
    opacity: 0.4;
    cursor: not-allowed;
}

.result {
    margin-top: 1.5rem;
    font-size: 1.6rem;
}

.neon-text {
    text-shadow: 0 0 4px #fff, 0 0 10px #ff00de;
}

.result-win {
    color: #39ff14;
}

.result-lose {
    color: #ff073a;
}
"#;
